//! Command handlers for the `emcee` CLI.
//!
//! Each submodule works on an in-memory source and a writer, so the same
//! code serves the binary and the tests. File reading and dispatch live
//! here in the module root.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::{Command, Config, USAGE};
use crate::error::DriverError;

mod check;
mod lex;

pub use check::check_source;
pub use lex::lex_source;

/// Display name used for a source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Run the configured command.
///
/// Regular output goes to `out`, diagnostics to `err`. Returns the number of
/// lexical errors found, which is always zero for commands other than `check`.
pub fn run(config: &Config, out: &mut impl Write, err: &mut impl Write) -> Result<usize, DriverError> {
    match config.command {
        Command::Help => {
            out.write_all(USAGE.as_bytes())?;
            Ok(0)
        }
        Command::Version => {
            writeln!(out, "emcee {}", env!("CARGO_PKG_VERSION"))?;
            Ok(0)
        }
        Command::Lex => {
            let with_headers = config.files.len() > 1;
            for (i, path) in config.files.iter().enumerate() {
                let (name, source) = read_source(path)?;
                if with_headers {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "==> {name} <==")?;
                }
                lex_source(&name, &source, config.show_blanks, out)?;
            }
            Ok(0)
        }
        Command::Check => {
            let mut errors = 0;
            for path in &config.files {
                let (name, source) = read_source(path)?;
                errors += check_source(&name, &source, err)?;
            }
            if errors > 0 {
                let plural = if errors == 1 { "" } else { "s" };
                writeln!(err, "found {errors} lexical error{plural}")?;
            }
            Ok(errors)
        }
    }
}

/// Read a source file, or standard input for `-`.
///
/// Returns the display name alongside the contents.
pub fn read_source(path: &Path) -> Result<(String, String), DriverError> {
    let io_error = |source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map_err(io_error)?;
        return Ok((STDIN_NAME.to_owned(), source));
    }

    let source = fs::read_to_string(path).map_err(io_error)?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok((path.display().to_string(), source))
}
