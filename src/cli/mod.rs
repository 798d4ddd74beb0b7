// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! CLI subsystem: dispatch, commands, external tools

pub mod commands;
pub mod dispatch;
pub mod intermediate;
pub mod options;
pub mod reporter;
pub mod runner;

pub use commands::{CommandKind, CommandPlan};
pub use dispatch::{Harness, Mode};
pub use intermediate::IntermediateFile;
pub use options::{ModelOptions, RESERVED_IDS};
pub use reporter::Reporter;
pub use runner::Toolchain;
