//! `emcee check`: report lexical errors with source snippets.

use std::io::{self, Write};
use std::num::IntErrorKind;
use std::ops::Range;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use emily_lexer::{tokenize_iter, LexError, Token};

/// Render every `Error` token of `source` to `err` and return how many
/// there were.
#[tracing::instrument(level = "debug", skip(source, err))]
pub fn check_source(name: &str, source: &str, err: &mut impl Write) -> io::Result<usize> {
    let mut count = 0;
    for token in tokenize_iter(source) {
        let Some(error) = token.error() else {
            continue;
        };
        count += 1;
        report(name, &token, error).write((name, Source::from(source)), &mut *err)?;
    }
    Ok(count)
}

fn report<'a>(
    name: &'a str,
    token: &Token,
    error: &LexError,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut builder = Report::build(ReportKind::Error, name, token.start)
        .with_config(
            Config::default()
                .with_color(false)
                .with_index_type(IndexType::Byte),
        )
        .with_message(title(error))
        .with_label(Label::new((name, token.span())).with_message(error));
    if let Some(help) = help(error) {
        builder = builder.with_help(help);
    }
    builder.finish()
}

fn title(error: &LexError) -> &'static str {
    match error {
        LexError::Unexpected { .. } => "unrecognized character",
        LexError::MisplacedSeparator { .. } => "misplaced digit separator",
        LexError::Integer { .. } => "invalid integer literal",
        LexError::Float { .. } | LexError::FloatOutOfRange => "invalid float literal",
    }
}

fn help(error: &LexError) -> Option<&'static str> {
    match error {
        LexError::MisplacedSeparator { .. } => {
            Some("`_` may only appear between two digits, or right after `0x`, `0o` or `0b`")
        }
        LexError::Integer { source, .. }
            if matches!(
                source.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            Some("integer literals must fit in a signed 64-bit value")
        }
        LexError::FloatOutOfRange => Some("float literals must be finite"),
        _ => None,
    }
}
