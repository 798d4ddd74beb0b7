// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! CLI output reporter with colored formatting

use colored::*;

/// Reporter for user-facing status lines. Messages go to stderr so they
/// never mix with rendered SCAD on stdout.
pub struct Reporter;

impl Reporter {
    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✅".green(), message.green());
    }
}
