// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Argument-tree construction and command dispatch

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Command;

use super::commands::CommandKind;
use super::options::{is_reserved, ModelOptions};
use super::reporter::Reporter;
use super::runner::Toolchain;
use crate::error::{Error, Result};
use crate::model::ModelSpec;

/// How models are attached to the argument tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One implicit model; its options attach directly to each command.
    Single,
    /// Each command gains a required model-selector subcommand per model.
    Multi,
}

/// The CLI entry point: binds a set of models to the print/write/build
/// commands and runs one invocation end to end.
pub struct Harness {
    name: String,
    models: Vec<Box<dyn ModelSpec>>,
    mode: Mode,
    toolchain: Toolchain,
}

impl Harness {
    pub fn new(name: impl Into<String>, models: Vec<Box<dyn ModelSpec>>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            models,
            mode,
            toolchain: Toolchain::new(),
        }
    }

    /// Harness for exactly one model.
    pub fn single(name: impl Into<String>, model: Box<dyn ModelSpec>) -> Self {
        Self::new(name, vec![model], Mode::Single)
    }

    /// Harness for a named collection of models.
    pub fn multi(name: impl Into<String>, models: Vec<Box<dyn ModelSpec>>) -> Self {
        Self::new(name, models, Mode::Multi)
    }

    /// Point the harness at alternate external programs.
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Parse `std::env::args_os` and run the selected command, mapping the
    /// outcome to a process exit code.
    pub fn run(&self) -> ExitCode {
        let mut stdout = io::stdout();
        match self.run_with(std::env::args_os(), &mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            // clap prints its own message and picks the exit code (2 for
            // usage errors, 0 for --help and --version).
            Err(Error::Usage(err)) => err.exit(),
            Err(err) => {
                Reporter::report_error(&err.to_string());
                ExitCode::FAILURE
            }
        }
    }

    /// Run one invocation against an explicit argv and output stream.
    pub fn run_with<I, T>(&self, argv: I, out: &mut dyn io::Write) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command()?.try_get_matches_from(argv)?;

        let (cmd_name, cmd_matches) = matches
            .subcommand()
            .expect("command subcommand is required by clap");
        let kind = CommandKind::from_name(cmd_name)
            .expect("only registered commands can be selected");

        let (model, leaf) = match self.mode {
            Mode::Multi => {
                let (model_name, leaf) = cmd_matches
                    .subcommand()
                    .expect("model subcommand is required by clap");
                let model = self
                    .models
                    .iter()
                    .find(|m| m.name() == model_name)
                    .expect("only registered models can be selected");
                (model, leaf)
            }
            Mode::Single => (&self.models[0], cmd_matches),
        };

        // Fail-fast resources first, then the model build, then execution.
        let plan = kind.plan(leaf)?;
        let args = ModelOptions::new(leaf);
        let built = model.build(&args).map_err(Error::Model)?;
        plan.execute(&self.toolchain, out, built.as_ref())
    }

    /// Build the full parser tree. Configuration problems surface here,
    /// before any argv is parsed.
    pub fn command(&self) -> Result<Command> {
        self.validate()?;

        let about = match self.mode {
            Mode::Single => format!("CLI for working with {} models", self.models[0].name()),
            Mode::Multi => "CLI for working with models".to_string(),
        };

        let mut root = Command::new(self.name.clone())
            .about(about)
            .subcommand_required(true)
            .arg_required_else_help(true);

        for kind in CommandKind::ALL {
            let mut cmd = kind.command();
            match self.mode {
                Mode::Multi => {
                    cmd = cmd.subcommand_required(true);
                    for model in &self.models {
                        let mut leaf = Command::new(model.name().to_string());
                        leaf = kind.add_args(leaf);
                        leaf = model.register_args(leaf);
                        cmd = cmd.subcommand(leaf);
                    }
                }
                Mode::Single => {
                    cmd = kind.add_args(cmd);
                    cmd = self.models[0].register_args(cmd);
                }
            }
            root = root.subcommand(cmd);
        }

        Ok(root)
    }

    fn validate(&self) -> Result<()> {
        match self.mode {
            Mode::Multi if self.models.is_empty() => {
                return Err(Error::Config(
                    "you must provide at least one model in multi mode".into(),
                ));
            }
            Mode::Single if self.models.len() != 1 => {
                return Err(Error::Config(format!(
                    "expected one model in single mode but found {}",
                    self.models.len()
                )));
            }
            _ => {}
        }

        for model in &self.models {
            let probe = model.register_args(Command::new("probe"));
            for arg in probe.get_arguments() {
                let id = arg.get_id().as_str();
                if is_reserved(id) {
                    return Err(Error::Config(format!(
                        "model {} declares the reserved option id {id}",
                        model.name()
                    )));
                }
            }
        }

        Ok(())
    }
}
