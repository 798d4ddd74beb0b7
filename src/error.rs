// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Error taxonomy for the harness
//!
//! Every failure is a fatal abort with a propagated message; nothing is
//! retried. Viewer failures are deliberately unobserved and never surface
//! here.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Harness misconfiguration, detected when the argument tree is built
    /// and before any argv is parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Argument parsing failure; carries clap's usage message and exit code.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// File-system failure on a target or intermediate path.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A model's build hook failed.
    #[error("model build failed: {0}")]
    Model(anyhow::Error),

    /// The external compiler could not be found.
    #[error("{program} is not installed or not in PATH")]
    CompilerMissing { program: String },

    /// The external compiler could not be started.
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external compiler exited nonzero.
    #[error("{program} exited with status: {status}")]
    Compiler { program: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, Error>;
