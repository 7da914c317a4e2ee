//! Driver errors.
//!
//! Lexical errors are not here: they travel inside `Error` tokens and are
//! rendered by `check`. These are the failures that stop the driver itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why the driver could not finish a command.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// A source file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to stdout or stderr failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            DriverError::Usage(_) => 2,
            DriverError::Io { .. } | DriverError::Output(_) => 1,
        }
    }
}
