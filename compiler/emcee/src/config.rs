//! Command-line configuration.
//!
//! Arguments are parsed by hand: the surface is two subcommands and a
//! single flag.

use std::path::PathBuf;

use crate::error::DriverError;

/// Usage text printed by `emcee help` and after usage errors.
pub const USAGE: &str = "\
Usage: emcee <command> [options] <file>...

Commands:
  lex [--blanks] <file>...   Print the token stream of each file
  check <file>...            Report lexical errors (exit 1 if any)
  help                       Show this message

Options:
  --blanks                   Include whitespace tokens in `lex` output
  -h, --help                 Show this message
  --version                  Show the version

A file named `-` is read from standard input.
Set EMCEE_LOG (or RUST_LOG) to a tracing filter such as `emily_lexer=trace`
to log tokenizer activity to stderr.
";

/// Which subcommand to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Lex,
    Check,
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    /// Source files, in command-line order. Empty for `help` and `--version`.
    pub files: Vec<PathBuf>,
    /// Print `Blank` tokens in `lex` output.
    pub show_blanks: bool,
}

impl Config {
    /// Parse the arguments that follow the program name.
    ///
    /// No arguments at all means `help`.
    pub fn from_args<I, S>(args: I) -> Result<Self, DriverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let Some(name) = args.next() else {
            return Ok(Config::bare(Command::Help));
        };

        let command = match name.as_str() {
            "lex" => Command::Lex,
            "check" => Command::Check,
            "help" | "--help" | "-h" => Command::Help,
            "--version" => Command::Version,
            other => return Err(DriverError::Usage(format!("unknown command `{other}`"))),
        };

        let mut config = Config::bare(command);
        for arg in args {
            match (command, arg.as_str()) {
                (Command::Help | Command::Version, _) => {
                    return Err(DriverError::Usage(format!(
                        "unexpected argument `{arg}` after `{name}`"
                    )));
                }
                (Command::Lex, "--blanks") => config.show_blanks = true,
                (_, flag) if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(DriverError::Usage(format!(
                        "unknown flag `{flag}` for `{name}`"
                    )));
                }
                _ => config.files.push(PathBuf::from(&arg)),
            }
        }

        if matches!(command, Command::Lex | Command::Check) && config.files.is_empty() {
            return Err(DriverError::Usage(format!(
                "`{name}` needs at least one file"
            )));
        }
        Ok(config)
    }

    fn bare(command: Command) -> Self {
        Config {
            command,
            files: Vec::new(),
            show_blanks: false,
        }
    }
}
