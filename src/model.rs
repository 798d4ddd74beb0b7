// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Model capability traits
//!
//! A [`ModelSpec`] is one buildable parametric model: a name, a hook for
//! model-specific CLI options, and a build function producing an opaque
//! [`Renderable`].

use clap::Command;

use crate::cli::ModelOptions;

/// Opaque value produced by a model build.
///
/// The harness performs exactly one operation on it: rendering to OpenSCAD
/// source text. It is never inspected otherwise.
pub trait Renderable {
    fn render(&self) -> String;
}

/// Models may emit SCAD source directly.
impl Renderable for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Renderable for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

/// A user-defined buildable model.
pub trait ModelSpec {
    /// Model name. Doubles as the selector subcommand in multi mode, so it
    /// must be unique among the models handed to one harness.
    fn name(&self) -> &str;

    /// Hook for any options your model needs. Option ids must not reuse the
    /// command-owned ids in [`crate::cli::RESERVED_IDS`]; doing so is a
    /// configuration error at harness setup.
    fn register_args(&self, cmd: Command) -> Command {
        cmd
    }

    /// The main logic of your model. Returns something that can be rendered
    /// to SCAD source.
    fn build(&self, args: &ModelOptions<'_>) -> anyhow::Result<Box<dyn Renderable>>;
}
