//! `emcee lex`: print the token stream.

use std::io::{self, Write};

use emily_lexer::tokenize_iter;

/// Write one line per token of `source`: `<Kind> <start>..<end>` followed by
/// the value for payload-carrying kinds.
///
/// `Blank` tokens are skipped unless `show_blanks` is set. The final `Nil`
/// is always printed.
#[tracing::instrument(level = "debug", skip(source, out))]
pub fn lex_source(name: &str, source: &str, show_blanks: bool, out: &mut impl Write) -> io::Result<()> {
    for token in tokenize_iter(source) {
        if token.kind.is_trivia() && !show_blanks {
            continue;
        }
        writeln!(out, "{token}")?;
    }
    Ok(())
}
