//! Lexical front end for the Emily language.
//!
//! Converts UTF-8 source text into a flat stream of [`Token`]s. Every byte of
//! the input belongs to exactly one token, blanks included, and the stream
//! always ends with a single zero-width [`TokenKind::Nil`]. Malformed input
//! never aborts tokenization: it surfaces as an [`TokenKind::Error`] token
//! carrying a [`LexError`], and the next token starts right after it.
//!
//! # Layers
//!
//! - [`window`]: two-offset sliding view over the source buffer
//! - [`symbols`]: single-code-point punctuation table
//! - [`tokenizer`]: classification and numeric conversion on top of the window
//!
//! # Example
//!
//! ```
//! use emily_lexer::{tokenize, TokenKind, Value};
//!
//! let tokens = tokenize("println(42)");
//! assert_eq!(tokens[2].kind, TokenKind::Integer);
//! assert_eq!(tokens[2].value, Value::Integer(42));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Nil));
//! ```

pub mod error;
mod numeric;
pub mod symbols;
pub mod token;
pub mod tokenizer;
pub mod window;

pub use error::{LexError, Radix};
pub use token::{Position, Token, TokenKind, Value};
pub use tokenizer::{Tokenizer, Tokens};
pub use window::Window;

/// Tokenize a whole source string, including the final `Nil`.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_iter(source).collect()
}

/// Lazily tokenize a source string. The iterator ends after the `Nil` token.
pub fn tokenize_iter(source: &str) -> Tokens<'_> {
    Tokenizer::new(source).into_iter()
}
