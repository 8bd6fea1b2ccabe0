//! Token types for the block-program lexer.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `emit` keyword.
    Emit,
    /// `repeat` keyword.
    Repeat,
    /// Any other identifier. Always a parse fault, carried through so the
    /// error can name it.
    Ident(String),
    /// Non-negative integer literal: `3`
    Number(u32),
    /// String literal: `"MOVE"`
    StringLit(String),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Emit => write!(f, "emit"),
            TokenKind::Repeat => write!(f, "repeat"),
            TokenKind::Ident(name) => write!(f, "{}", name),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::StringLit(s) => write!(f, "\"{}\"", s),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Eof => write!(f, "end of program"),
        }
    }
}

/// A single token with the 1-based source line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }
}
