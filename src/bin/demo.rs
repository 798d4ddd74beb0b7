// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Demo models wired through the scadcli harness
//!
//! Two small parametric models showing the multi-model surface:
//!
//! ```text
//! scadcli-demo print plate --width 60
//! scadcli-demo write tube --outer 12 --inner 9 --preview tube.scad
//! scadcli-demo build plate --scad-file plate.scad plate.stl
//! ```

use std::process::ExitCode;

use anyhow::ensure;
use clap::{value_parser, Arg, Command};
use scadcli::{Harness, ModelOptions, ModelSpec, Renderable};

/// A rectangular mounting plate.
struct Plate;

impl ModelSpec for Plate {
    fn name(&self) -> &str {
        "plate"
    }

    fn register_args(&self, cmd: Command) -> Command {
        cmd.arg(
            Arg::new("width")
                .long("width")
                .value_parser(value_parser!(f64))
                .default_value("40.0")
                .help("Plate width in mm"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .value_parser(value_parser!(f64))
                .default_value("40.0")
                .help("Plate depth in mm"),
        )
        .arg(
            Arg::new("thickness")
                .long("thickness")
                .value_parser(value_parser!(f64))
                .default_value("3.0")
                .help("Plate thickness in mm"),
        )
    }

    fn build(&self, args: &ModelOptions<'_>) -> anyhow::Result<Box<dyn Renderable>> {
        let width = args.get_one::<f64>("width").copied().unwrap_or(40.0);
        let depth = args.get_one::<f64>("depth").copied().unwrap_or(40.0);
        let thickness = args.get_one::<f64>("thickness").copied().unwrap_or(3.0);
        ensure!(thickness > 0.0, "thickness must be positive");

        Ok(Box::new(format!(
            "cube([{width:.3}, {depth:.3}, {thickness:.3}]);"
        )))
    }
}

/// A straight tube, outer cylinder minus bore.
struct Tube;

impl ModelSpec for Tube {
    fn name(&self) -> &str {
        "tube"
    }

    fn register_args(&self, cmd: Command) -> Command {
        cmd.arg(
            Arg::new("outer")
                .long("outer")
                .value_parser(value_parser!(f64))
                .default_value("10.0")
                .help("Outer radius in mm"),
        )
        .arg(
            Arg::new("inner")
                .long("inner")
                .value_parser(value_parser!(f64))
                .default_value("8.0")
                .help("Bore radius in mm"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(value_parser!(f64))
                .default_value("30.0")
                .help("Tube height in mm"),
        )
    }

    fn build(&self, args: &ModelOptions<'_>) -> anyhow::Result<Box<dyn Renderable>> {
        let outer = args.get_one::<f64>("outer").copied().unwrap_or(10.0);
        let inner = args.get_one::<f64>("inner").copied().unwrap_or(8.0);
        let height = args.get_one::<f64>("height").copied().unwrap_or(30.0);
        ensure!(inner < outer, "bore radius must be smaller than outer radius");

        Ok(Box::new(format!(
            "difference() {{\n  \
               cylinder(h = {height:.3}, r = {outer:.3});\n  \
               translate([0, 0, -1]) cylinder(h = {height:.3} + 2, r = {inner:.3});\n\
             }}"
        )))
    }
}

fn main() -> ExitCode {
    let models: Vec<Box<dyn ModelSpec>> = vec![Box::new(Plate), Box::new(Tube)];
    Harness::multi("scadcli-demo", models).run()
}
