//! Fatal errors raised while checking a node file.
//!
//! Content problems (duplicate ids, shared addresses, ...) are never errors in
//! this sense; they are reported as diagnostics and the scan carries on. The
//! variants here abort the scan before any diagnostic reaches the console.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that stop a node file check outright
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Cannot access file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot access file {}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    /// The node file that could not be accessed
    pub fn path(&self) -> &Path {
        match self {
            CheckError::Open { path, .. } | CheckError::Read { path, .. } => path,
        }
    }
}
