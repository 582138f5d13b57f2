pub mod error;
pub mod expressions;
pub mod statements;

use crate::ast::Program;
use crate::lexer::{Token, TokenKind};
pub use error::{Expected, ParseError};
use statements::parse_statement;

/// Recursive-descent parser with one-token lookahead. The first structural
/// violation aborts parsing; there is no resynchronization.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            tokens.push(Token::new("EndOfFile", TokenKind::Eof));
        }
        Self { tokens, pos: 0 }
    }

    /// Current token; the stream always ends with the `Eof` sentinel, on
    /// which the cursor parks.
    pub(crate) fn at(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn eat(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.eat();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected_token(kind, token))
        }
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let token = self.eat();
        if token.kind == TokenKind::Identifier {
            Ok(token.lexeme)
        } else {
            Err(ParseError::UnexpectedToken {
                expected: Expected::Identifier,
                found: token,
            })
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while self.at().kind != TokenKind::Eof {
            body.push(parse_statement(self)?);
        }
        Ok(Program { body })
    }
}
