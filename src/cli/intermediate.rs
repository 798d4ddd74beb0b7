// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadcli Developers

//! Intermediate SCAD file handed to the external compiler

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// The SCAD file the `build` command writes before invoking the compiler.
///
/// Two constructors, one contract: write, flush, then yield a stable path.
/// The ephemeral variant is removed on drop, whatever the exit path; the
/// named variant is retained on disk after the command completes.
pub enum IntermediateFile {
    Named { path: PathBuf, file: File },
    Ephemeral(NamedTempFile),
}

impl IntermediateFile {
    /// Create at an explicit path. Tilde and environment references in the
    /// raw string are expanded first.
    pub fn named(raw: &str) -> Result<Self> {
        let expanded = shellexpand::full(raw).map_err(|e| Error::Io {
            path: PathBuf::from(raw),
            source: io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
        })?;
        let path = PathBuf::from(expanded.into_owned());
        let file = File::create(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self::Named { path, file })
    }

    /// Create an unnamed process-scoped temp file.
    pub fn ephemeral() -> Result<Self> {
        let file = NamedTempFile::new().map_err(|source| Error::Io {
            path: std::env::temp_dir(),
            source,
        })?;
        Ok(Self::Ephemeral(file))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Named { path, .. } => path,
            Self::Ephemeral(file) => file.path(),
        }
    }
}

impl Write for IntermediateFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Named { file, .. } => file.write(buf),
            Self::Ephemeral(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Named { file, .. } => file.flush(),
            Self::Ephemeral(file) => file.flush(),
        }
    }
}
