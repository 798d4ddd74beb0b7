// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! The three harness commands: print, write, build
//!
//! Each command contributes its own clap arguments to the tree and
//! resolves to a [`CommandPlan`] before the model is built, so that
//! fail-fast resources (write's target file) are acquired up front.

use std::fs::File;
use std::io::Write as _;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use super::intermediate::IntermediateFile;
use super::runner::Toolchain;
use crate::error::{Error, Result};
use crate::model::Renderable;

/// The fixed command set. Not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Print,
    Write,
    Build,
}

impl CommandKind {
    pub const ALL: [CommandKind; 3] = [CommandKind::Print, CommandKind::Write, CommandKind::Build];

    pub fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Write => "write",
            Self::Build => "build",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The command's subcommand shell, without its arguments.
    pub fn command(self) -> Command {
        match self {
            Self::Print => Command::new("print")
                .about("Build the model and print the scad code to the screen"),
            Self::Write => {
                Command::new("write").about("Build the model and write the scad to a file")
            }
            Self::Build => Command::new("build")
                .about("Build the model and then compile it to an stl file with openscad"),
        }
    }

    /// Layer the command's own arguments onto the leaf parser. Model options
    /// are registered on the same leaf afterwards.
    pub fn add_args(self, cmd: Command) -> Command {
        match self {
            Self::Print => cmd,
            Self::Write => cmd
                .arg(
                    Arg::new("print")
                        .long("print")
                        .action(ArgAction::SetTrue)
                        .help("Print the code in addition to writing it"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .action(ArgAction::SetTrue)
                        .help(
                            "Preview the result in OpenSCAD. This is useful once off but you \
                             should run write regularly and without it and use autorefresh in \
                             OpenSCAD for easiest workflow",
                        ),
                )
                .arg(
                    Arg::new("target_file")
                        .value_name("TARGET_FILE")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The scad path to write to"),
                ),
            Self::Build => cmd
                .arg(
                    Arg::new("scad_file")
                        .long("scad-file")
                        .value_name("PATH")
                        .help("Write scad to this file (useful for seeing intermediate steps)"),
                )
                .arg(
                    Arg::new("target_file")
                        .value_name("TARGET_FILE")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The STL path to output to"),
                ),
        }
    }

    /// Resolve the parsed leaf matches into an executable plan. Runs before
    /// the model build; write's target is opened here so an unwritable path
    /// fails fast.
    pub fn plan(self, matches: &ArgMatches) -> Result<CommandPlan> {
        match self {
            Self::Print => Ok(CommandPlan::Print),
            Self::Write => {
                let path = matches
                    .get_one::<PathBuf>("target_file")
                    .cloned()
                    .expect("target_file is required by clap");
                let file = File::create(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(CommandPlan::Write {
                    file,
                    path,
                    echo: matches.get_flag("print"),
                    preview: matches.get_flag("preview"),
                })
            }
            Self::Build => Ok(CommandPlan::Build {
                scad_file: matches.get_one::<String>("scad_file").cloned(),
                target: matches
                    .get_one::<PathBuf>("target_file")
                    .cloned()
                    .expect("target_file is required by clap"),
            }),
        }
    }
}

/// A resolved command, holding any fail-fast resources, ready to run
/// against a built model.
pub enum CommandPlan {
    Print,
    Write {
        file: File,
        path: PathBuf,
        echo: bool,
        preview: bool,
    },
    Build {
        scad_file: Option<String>,
        target: PathBuf,
    },
}

impl CommandPlan {
    pub fn execute(
        self,
        toolchain: &Toolchain,
        out: &mut dyn std::io::Write,
        model: &dyn Renderable,
    ) -> Result<()> {
        let code = model.render();
        match self {
            Self::Print => {
                writeln!(out, "{code}").map_err(stdout_error)?;
                Ok(())
            }
            Self::Write {
                mut file,
                path,
                echo,
                preview,
            } => {
                if echo {
                    writeln!(out, "{code}").map_err(stdout_error)?;
                }
                file.write_all(code.as_bytes())
                    .and_then(|()| file.flush())
                    .map_err(|source| Error::Io {
                        path: path.clone(),
                        source,
                    })?;
                drop(file);

                if preview {
                    toolchain.preview(&path);
                }
                Ok(())
            }
            Self::Build { scad_file, target } => {
                let mut scad = match scad_file {
                    Some(raw) => IntermediateFile::named(&raw)?,
                    None => IntermediateFile::ephemeral()?,
                };
                scad.write_all(code.as_bytes())
                    .and_then(|()| scad.flush())
                    .map_err(|source| Error::Io {
                        path: scad.path().to_path_buf(),
                        source,
                    })?;
                // The ephemeral variant is removed when `scad` drops, on the
                // error paths above and below as much as on success.
                toolchain.compile(&target, scad.path())
            }
        }
    }
}

fn stdout_error(source: std::io::Error) -> Error {
    Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_matches(kind: CommandKind, argv: &[&str]) -> ArgMatches {
        kind.add_args(kind.command())
            .try_get_matches_from(argv.iter().copied())
            .unwrap()
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("publish"), None);
    }

    #[test]
    fn test_write_plan_opens_target_up_front() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.scad");
        let matches = leaf_matches(
            CommandKind::Write,
            &["write", "--print", target.to_str().unwrap()],
        );
        let plan = CommandKind::Write.plan(&matches).unwrap();
        // The file exists before anything was rendered.
        assert!(target.exists());
        match plan {
            CommandPlan::Write { echo, preview, .. } => {
                assert!(echo);
                assert!(!preview);
            }
            _ => panic!("expected write plan"),
        }
    }

    #[test]
    fn test_write_plan_unwritable_target() {
        let matches = leaf_matches(CommandKind::Write, &["write", "/no/such/dir/out.scad"]);
        let err = CommandKind::Write.plan(&matches);
        assert!(matches!(err, Err(Error::Io { .. })));
    }

    #[test]
    fn test_build_plan_paths() {
        let matches = leaf_matches(
            CommandKind::Build,
            &["build", "--scad-file", "inter.scad", "out.stl"],
        );
        match CommandKind::Build.plan(&matches).unwrap() {
            CommandPlan::Build { scad_file, target } => {
                assert_eq!(scad_file.as_deref(), Some("inter.scad"));
                assert_eq!(target, PathBuf::from("out.stl"));
            }
            _ => panic!("expected build plan"),
        }
    }
}
