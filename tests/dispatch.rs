// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Harness dispatch behavior across the three commands

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clap::{value_parser, Arg, Command};
use scadcli::{Error, Harness, ModelOptions, ModelSpec, Renderable};

/// Test model rendering a parametric cube. Counts build calls and asserts
/// the command-owned argument ids are invisible to it.
struct Cube {
    builds: Arc<AtomicUsize>,
}

impl Cube {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let builds = Arc::new(AtomicUsize::new(0));
        (
            Self {
                builds: Arc::clone(&builds),
            },
            builds,
        )
    }
}

impl ModelSpec for Cube {
    fn name(&self) -> &str {
        "cube"
    }

    fn register_args(&self, cmd: Command) -> Command {
        cmd.arg(
            Arg::new("size")
                .long("size")
                .value_parser(value_parser!(f64))
                .default_value("1.0"),
        )
    }

    fn build(&self, args: &ModelOptions<'_>) -> anyhow::Result<Box<dyn Renderable>> {
        self.builds.fetch_add(1, Ordering::SeqCst);

        assert!(!args.get_flag("print"));
        assert!(!args.get_flag("preview"));
        assert!(args.get_one::<PathBuf>("target_file").is_none());
        assert!(args.get_one::<String>("scad_file").is_none());

        let size = args.get_one::<f64>("size").copied().unwrap_or(1.0);
        Ok(Box::new(format!("cube([{size}, {size}, {size}]);")))
    }
}

#[test]
fn test_print_emits_exactly_the_render_output() {
    let (cube, builds) = Cube::new();
    let harness = Harness::single("prog", Box::new(cube));

    let mut out = Vec::new();
    harness
        .run_with(["prog", "print", "--size", "5"], &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "cube([5, 5, 5]);\n");
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_write_with_print_echoes_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.scad");

    let (cube, _) = Cube::new();
    let harness = Harness::single("prog", Box::new(cube));

    let mut out = Vec::new();
    harness
        .run_with(
            ["prog", "write", "--print", target.to_str().unwrap()],
            &mut out,
        )
        .unwrap();

    let file_contents = std::fs::read_to_string(&target).unwrap();
    assert_eq!(file_contents, "cube([1, 1, 1]);");
    assert_eq!(String::from_utf8(out).unwrap(), "cube([1, 1, 1]);\n");
}

#[test]
fn test_write_without_print_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.scad");

    let (cube, _) = Cube::new();
    let harness = Harness::single("prog", Box::new(cube));

    let mut out = Vec::new();
    harness
        .run_with(["prog", "write", target.to_str().unwrap()], &mut out)
        .unwrap();

    assert!(out.is_empty());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "cube([1, 1, 1]);");
}

#[test]
fn test_write_unwritable_target_fails_before_build() {
    let (cube, builds) = Cube::new();
    let harness = Harness::single("prog", Box::new(cube));

    let mut out = Vec::new();
    let err = harness.run_with(
        ["prog", "write", "/no/such/dir/out.scad"],
        &mut out,
    );

    assert!(matches!(err, Err(Error::Io { .. })));
    assert_eq!(builds.load(Ordering::SeqCst), 0);
}

#[test]
fn test_multi_mode_selects_by_name() {
    let (cube, _) = Cube::new();
    let harness = Harness::multi("prog", vec![Box::new(cube) as Box<dyn ModelSpec>]);

    let mut out = Vec::new();
    harness
        .run_with(["prog", "print", "cube", "--size", "2"], &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "cube([2, 2, 2]);\n");
}

#[test]
fn test_multi_mode_unknown_model_never_builds() {
    let (cube, builds) = Cube::new();
    let harness = Harness::multi("prog", vec![Box::new(cube) as Box<dyn ModelSpec>]);

    let mut out = Vec::new();
    let err = harness.run_with(["prog", "print", "gear"], &mut out);

    assert!(matches!(err, Err(Error::Usage(_))));
    assert_eq!(builds.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_command_is_a_usage_error() {
    let (cube, _) = Cube::new();
    let harness = Harness::single("prog", Box::new(cube));

    let mut out = Vec::new();
    let err = harness.run_with(["prog"], &mut out);
    assert!(matches!(err, Err(Error::Usage(_))));
}
