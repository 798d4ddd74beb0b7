// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Scadcli
//!
//! A command-line harness for parametric OpenSCAD models defined in Rust
//! code. Implement [`ModelSpec`] for each model, hand the models to a
//! [`Harness`], and get a uniform CLI with three commands:
//!
//! * `print` — build the model and print the SCAD code to stdout
//! * `write` — build the model and write the SCAD code to a file, with
//!   optional echo (`--print`) and a detached OpenSCAD preview (`--preview`)
//! * `build` — build the model, write the SCAD code to an intermediate file
//!   and compile it to a mesh with the external `openscad` binary

pub mod cli;
pub mod error;
pub mod model;

pub use cli::{Harness, IntermediateFile, Mode, ModelOptions, Toolchain};
pub use error::{Error, Result};
pub use model::{ModelSpec, Renderable};
