//! Command-line driver for the Emily lexical front end.
//!
//! The binary is a thin shell over [`run`]: it parses a [`Config`] from the
//! process arguments, installs tracing, and maps the outcome to an exit
//! status. Everything else lives here so it can be driven in-process.

pub mod commands;
pub mod config;
pub mod error;
mod logging;

pub use commands::{check_source, lex_source, read_source, run};
pub use config::{Command, Config, USAGE};
pub use error::DriverError;
pub use logging::{init_tracing, LOG_ENV};
