//! Parser for the block-program mini-language.
//!
//! Grammar:
//!
//! ```text
//! program := item*
//! item    := "emit" "(" STRING ("," STRING)? ")"
//!          | "repeat" NUMBER "{" item* "}"
//! ```
//!
//! The block editor generates this text; nothing else ever does, but the
//! parser still has to survive whatever a half-built workspace produces.

use crate::translator::error::ParseError;
use crate::translator::token::{Token, TokenKind};

/// One node of a parsed program.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `emit("MOVE")` or `emit("MOVE", "block-7")`
    Emit {
        name: String,
        payload: Option<String>,
        line: u32,
    },
    /// `repeat 3 { ... }`
    Repeat { count: u32, body: Vec<Item> },
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

/// Parse a token stream into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Item>, ParseError> {
    Parser::new(tokens).parse_program()
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let line = tokens.last().map(|t| t.line).unwrap_or(1);
            tokens.push(Token::new(TokenKind::Eof, line));
        }
        Self { tokens, pos: 0 }
    }

    fn parse_program(&mut self) -> Result<Vec<Item>, ParseError> {
        let mut items = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            items.push(self.parse_item()?);
        }
        Ok(items)
    }

    fn parse_item(&mut self) -> Result<Item, ParseError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Emit => self.parse_emit(token.line),
            TokenKind::Repeat => self.parse_repeat(),
            other => Err(ParseError::UnexpectedToken {
                line: token.line,
                expected: "emit or repeat",
                found: other.to_string(),
            }),
        }
    }

    fn parse_emit(&mut self, line: u32) -> Result<Item, ParseError> {
        self.expect(TokenKind::LParen, "(")?;
        let name = self.expect_string("a command name")?;
        let payload = if self.peek().kind == TokenKind::Comma {
            self.bump();
            Some(self.expect_string("a payload string")?)
        } else {
            None
        };
        self.expect(TokenKind::RParen, ")")?;
        Ok(Item::Emit { name, payload, line })
    }

    fn parse_repeat(&mut self) -> Result<Item, ParseError> {
        let count = self.expect_number("a repeat count")?;
        self.expect(TokenKind::LBrace, "{")?;
        let mut body = Vec::new();
        while self.peek().kind != TokenKind::RBrace {
            if self.peek().kind == TokenKind::Eof {
                let token = self.peek().clone();
                return Err(ParseError::UnexpectedToken {
                    line: token.line,
                    expected: "}",
                    found: token.kind.to_string(),
                });
            }
            body.push(self.parse_item()?);
        }
        self.bump(); // closing brace
        Ok(Item::Repeat { count, body })
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        let token = self.bump();
        if token.kind == kind {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                line: token.line,
                expected,
                found: token.kind.to_string(),
            })
        }
    }

    fn expect_string(&mut self, expected: &'static str) -> Result<String, ParseError> {
        let token = self.bump();
        match token.kind {
            TokenKind::StringLit(text) => Ok(text),
            other => Err(ParseError::UnexpectedToken {
                line: token.line,
                expected,
                found: other.to_string(),
            }),
        }
    }

    fn expect_number(&mut self, expected: &'static str) -> Result<u32, ParseError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Number(value) => Ok(value),
            other => Err(ParseError::UnexpectedToken {
                line: token.line,
                expected,
                found: other.to_string(),
            }),
        }
    }

    /// Current token without consuming it. The stream always ends with
    /// `Eof`, so this never runs off the end.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }
}
