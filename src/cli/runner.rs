// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! External tool invocation for compiling and previewing SCAD files

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// The external programs the harness shells out to.
///
/// Both default to `openscad`, which is compiler and viewer in one binary.
/// Alternate programs are injectable, which tests use to substitute stub
/// scripts.
pub struct Toolchain {
    compiler: OsString,
    viewer: OsString,
}

impl Toolchain {
    pub fn new() -> Self {
        Self {
            compiler: "openscad".into(),
            viewer: "openscad".into(),
        }
    }

    pub fn with_programs(compiler: impl Into<OsString>, viewer: impl Into<OsString>) -> Self {
        Self {
            compiler: compiler.into(),
            viewer: viewer.into(),
        }
    }

    /// Compile a SCAD file to a mesh, blocking until the compiler exits.
    ///
    /// The compiler's own streams are inherited, never captured; its exit
    /// status is the sole success signal.
    pub fn compile(&self, target: &Path, input: &Path) -> Result<()> {
        if !self.is_compiler_available() {
            return Err(Error::CompilerMissing {
                program: self.compiler_name(),
            });
        }

        let status = Command::new(&self.compiler)
            .arg("-o")
            .arg(target)
            .arg(input)
            .status()
            .map_err(|source| Error::Spawn {
                program: self.compiler_name(),
                source,
            })?;

        if !status.success() {
            return Err(Error::Compiler {
                program: self.compiler_name(),
                status,
            });
        }

        Ok(())
    }

    /// Launch the viewer on a file, detached and fire-and-forget.
    ///
    /// The child handle is dropped immediately: no wait, no output capture,
    /// and a failed spawn is ignored. The viewer outlives the harness.
    pub fn preview(&self, file: &Path) {
        let _ = Command::new(&self.viewer)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }

    /// Check the compiler can be spawned at all.
    pub fn is_compiler_available(&self) -> bool {
        Command::new(&self.compiler).arg("--version").output().is_ok()
    }

    fn compiler_name(&self) -> String {
        self.compiler.to_string_lossy().into_owned()
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_programs() {
        let toolchain = Toolchain::new();
        assert_eq!(toolchain.compiler, "openscad");
        assert_eq!(toolchain.viewer, "openscad");
    }

    #[cfg(unix)]
    #[test]
    fn test_compile_success() {
        let toolchain = Toolchain::with_programs("true", "true");
        let out = Path::new("/tmp/out.stl");
        let input = Path::new("/tmp/in.scad");
        assert!(toolchain.compile(out, input).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_compile_nonzero_exit() {
        let toolchain = Toolchain::with_programs("false", "true");
        let out = Path::new("/tmp/out.stl");
        let input = Path::new("/tmp/in.scad");
        let err = toolchain.compile(out, input);
        assert!(matches!(err, Err(Error::Compiler { .. })));
    }

    #[test]
    fn test_missing_compiler() {
        let toolchain = Toolchain::with_programs("scadcli-no-such-binary", "true");
        assert!(!toolchain.is_compiler_available());
        let err = toolchain.compile(Path::new("a.stl"), Path::new("a.scad"));
        assert!(matches!(err, Err(Error::CompilerMissing { .. })));
    }
}
