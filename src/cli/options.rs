// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Partition between command-owned and model-owned argument ids

use clap::ArgMatches;

/// Argument ids owned by the harness commands. A model registering an
/// option with one of these ids is rejected at harness setup.
pub const RESERVED_IDS: [&str; 4] = ["print", "preview", "scad_file", "target_file"];

pub fn is_reserved(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

/// View over the parsed matches scoped to model-owned options.
///
/// In single mode the model's options are parsed into the same matches as
/// the command's own options; the accessors here resolve only author-defined
/// ids, with reserved ids reading as absent, so a model build can never
/// observe CLI plumbing.
pub struct ModelOptions<'a> {
    matches: &'a ArgMatches,
}

impl<'a> ModelOptions<'a> {
    pub(crate) fn new(matches: &'a ArgMatches) -> Self {
        Self { matches }
    }

    /// Value of a single-valued option, `None` if absent or reserved.
    pub fn get_one<T>(&self, id: &str) -> Option<&T>
    where
        T: std::any::Any + Clone + Send + Sync + 'static,
    {
        if is_reserved(id) {
            return None;
        }
        self.matches.get_one::<T>(id)
    }

    /// Values of a multi-valued option, `None` if absent or reserved.
    pub fn get_many<T>(&self, id: &str) -> Option<clap::parser::ValuesRef<'a, T>>
    where
        T: std::any::Any + Clone + Send + Sync + 'static,
    {
        if is_reserved(id) {
            return None;
        }
        self.matches.get_many::<T>(id)
    }

    /// State of a boolean flag, `false` if reserved.
    pub fn get_flag(&self, id: &str) -> bool {
        !is_reserved(id) && self.matches.get_flag(id)
    }

    /// Whether the option was provided at all, `false` if reserved.
    pub fn contains(&self, id: &str) -> bool {
        !is_reserved(id) && self.matches.contains_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{value_parser, Arg, ArgAction, Command};

    fn parse(argv: &[&str]) -> ArgMatches {
        Command::new("probe")
            .arg(
                Arg::new("print")
                    .long("print")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("width")
                    .long("width")
                    .value_parser(value_parser!(f64)),
            )
            .try_get_matches_from(argv.iter().copied())
            .unwrap()
    }

    #[test]
    fn test_model_keys_resolve() {
        let matches = parse(&["probe", "--width", "12.5"]);
        let opts = ModelOptions::new(&matches);
        assert_eq!(opts.get_one::<f64>("width"), Some(&12.5));
        assert!(opts.contains("width"));
    }

    #[test]
    fn test_reserved_keys_read_as_absent() {
        let matches = parse(&["probe", "--print", "--width", "1.0"]);
        let opts = ModelOptions::new(&matches);
        // --print was given on the command line but is command-owned.
        assert!(!opts.get_flag("print"));
        assert!(!opts.contains("print"));
        assert!(opts.get_one::<String>("target_file").is_none());
    }

    #[test]
    fn test_reserved_set() {
        for id in RESERVED_IDS {
            assert!(is_reserved(id));
        }
        assert!(!is_reserved("width"));
    }
}
