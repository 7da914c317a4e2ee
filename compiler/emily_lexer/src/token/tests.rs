use super::*;
use crate::error::LexError;

// === TokenKind discriminants ===

#[test]
fn repr_u8_stable_values() {
    assert_eq!(TokenKind::Nil as u8, 0);
    assert_eq!(TokenKind::Blank as u8, 1);
    assert_eq!(TokenKind::Integer as u8, 2);
    assert_eq!(TokenKind::Float as u8, 3);
    assert_eq!(TokenKind::Ident as u8, 4);
    assert_eq!(TokenKind::LParen as u8, 5);
    assert_eq!(TokenKind::RParen as u8, 6);
}

#[test]
fn error_is_pinned_at_max() {
    assert_eq!(TokenKind::Error.as_u8(), u8::MAX);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn debug_names() {
    let names: Vec<_> = [
        TokenKind::Nil,
        TokenKind::Blank,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::Ident,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Error,
    ]
    .iter()
    .map(|k| k.to_string())
    .collect();
    assert_eq!(
        names,
        ["Nil", "Blank", "Integer", "Float", "Ident", "LParen", "RParen", "Error"]
    );
}

#[test]
fn payload_kinds() {
    assert!(TokenKind::Integer.has_payload());
    assert!(TokenKind::Float.has_payload());
    assert!(TokenKind::Ident.has_payload());
    assert!(TokenKind::Error.has_payload());
    assert!(!TokenKind::Nil.has_payload());
    assert!(!TokenKind::Blank.has_payload());
    assert!(!TokenKind::LParen.has_payload());
    assert!(!TokenKind::RParen.has_payload());
}

#[test]
fn only_blank_is_trivia() {
    assert!(TokenKind::Blank.is_trivia());
    assert!(!TokenKind::Ident.is_trivia());
    assert!(!TokenKind::Nil.is_trivia());
}

// === Token ===

#[test]
fn span_and_text() {
    let source = "println(42)";
    let tok = Token::new(TokenKind::Ident, 0, 7, Value::Ident("println".to_owned()));
    assert_eq!(tok.span(), 0..7);
    assert_eq!(tok.len(), 7);
    assert!(!tok.is_empty());
    assert_eq!(tok.text(source), "println");
}

#[test]
fn nil_is_empty() {
    let tok = Token::new(TokenKind::Nil, 3, 3, Value::None);
    assert!(tok.is_nil());
    assert!(tok.is_empty());
    assert_eq!(tok.text("abc"), "");
}

#[test]
fn error_accessor() {
    let err = LexError::Unexpected { ch: '@', pos: 0 };
    let tok = Token::new(TokenKind::Error, 0, 1, Value::Error(err.clone()));
    assert_eq!(tok.error(), Some(&err));

    let tok = Token::new(TokenKind::Integer, 0, 1, Value::Integer(1));
    assert_eq!(tok.error(), None);
}

#[test]
fn display_without_payload() {
    let tok = Token::new(TokenKind::LParen, 7, 8, Value::None);
    assert_eq!(tok.to_string(), "LParen 7..8");
}

#[test]
fn display_with_payload() {
    let tok = Token::new(TokenKind::Integer, 8, 10, Value::Integer(42));
    assert_eq!(tok.to_string(), "Integer 8..10 42");

    let tok = Token::new(TokenKind::Float, 0, 3, Value::Float(1.5));
    assert_eq!(tok.to_string(), "Float 0..3 1.5");

    let tok = Token::new(TokenKind::Ident, 0, 1, Value::Ident("x".to_owned()));
    assert_eq!(tok.to_string(), "Ident 0..1 x");
}
