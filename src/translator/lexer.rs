//! Lexer for the block-program mini-language.
//!
//! Converts program text into a token stream. Whitespace is insignificant,
//! `//` starts a line comment, and the only keywords are `emit` and
//! `repeat`. The stream always ends with an `Eof` token.

use crate::translator::error::ParseError;
use crate::translator::token::{Token, TokenKind};

pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    line: u32,
}

/// Lex the whole program. Stops at the first fault.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).lex()
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    pub fn lex(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia();

        let line = self.line;
        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, line));
        };

        match c {
            b'(' => {
                self.bump();
                Ok(Token::new(TokenKind::LParen, line))
            }
            b')' => {
                self.bump();
                Ok(Token::new(TokenKind::RParen, line))
            }
            b'{' => {
                self.bump();
                Ok(Token::new(TokenKind::LBrace, line))
            }
            b'}' => {
                self.bump();
                Ok(Token::new(TokenKind::RBrace, line))
            }
            b',' => {
                self.bump();
                Ok(Token::new(TokenKind::Comma, line))
            }
            b'"' => self.scan_string(line),
            b'0'..=b'9' => self.scan_number(line),
            c if c.is_ascii_alphabetic() || c == b'_' => Ok(self.scan_word(line)),
            other => Err(ParseError::UnexpectedChar {
                line,
                found: other as char,
            }),
        }
    }

    /// Skip whitespace and `//` comments, tracking line numbers.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b'\n') => {
                    self.line += 1;
                    self.bump();
                }
                Some(c) if c.is_ascii_whitespace() => {
                    self.bump();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while let Some(c) = self.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_string(&mut self, line: u32) -> Result<Token, ParseError> {
        self.bump(); // opening quote
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'"') => {
                    let text = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
                    self.bump();
                    return Ok(Token::new(TokenKind::StringLit(text), line));
                }
                Some(b'\n') | None => {
                    return Err(ParseError::UnterminatedString { line });
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn scan_number(&mut self, line: u32) -> Result<Token, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump();
        }
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap_or("");
        let value = text
            .parse::<u32>()
            .map_err(|_| ParseError::NumberOutOfRange { line })?;
        Ok(Token::new(TokenKind::Number(value), line))
    }

    fn scan_word(&mut self, line: u32) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == b'_') {
                break;
            }
            self.bump();
        }
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap_or("");
        let kind = match text {
            "emit" => TokenKind::Emit,
            "repeat" => TokenKind::Repeat,
            other => TokenKind::Ident(other.to_string()),
        };
        Token::new(kind, line)
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }
}
