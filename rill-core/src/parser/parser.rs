use crate::lexer::prelude::{tokenize, tokenize_from, Spanned, Token};
use crate::utils::prelude::SrcSpan;

use super::ast::{Module, Program};
use super::error::{ParseError, ParseErrorType};

pub trait Parse
where
    Self: Sized,
{
    fn parse(parser: &mut Parser) -> Result<Self, ParseError>;
}

/// Consumes a terminated token buffer through a single forward cursor.
/// The buffer is never mutated, the cursor never moves past the final
/// `Eof` token and never backtracks.
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Spanned>) -> Self {
        if tokens.is_empty() {
            tokens.push((0, Token::Eof, 0));
        }

        Self { tokens, pos: 0 }
    }

    pub fn current(&self) -> &Spanned {
        &self.tokens[self.pos]
    }

    pub fn current_token(&self) -> &Token {
        &self.current().1
    }

    pub fn at_eof(&self) -> bool {
        matches!(self.current_token(), Token::Eof)
    }

    pub fn step(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub fn next_token(&mut self) -> Spanned {
        let spanned = self.current().clone();
        self.step();

        spanned
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current() {
            (start, tok, end) if *tok == token => {
                let span = (*start, *end);
                self.step();

                Ok(span)
            }
            (start, Token::Eof, end) => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan {
                    start: *start,
                    end: *end,
                },
            ),
            (start, tok, end) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: tok.clone(),
                    expected: vec![format!("`{}`", token.as_literal())],
                },
                SrcSpan {
                    start: *start,
                    end: *end,
                },
            ),
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current() {
            (start, Token::Ident(value), end) => {
                let ident = (*start, value.clone(), *end);
                self.step();

                Ok(ident)
            }
            (start, _, end) => parse_error(
                ParseErrorType::ExpectedIdent,
                SrcSpan {
                    start: *start,
                    end: *end,
                },
            ),
        }
    }

    pub fn parse(&mut self) -> Result<Module, ParseError> {
        let program = Program::parse(self)?;

        Ok(Module {
            name: "".into(),
            program,
        })
    }
}

pub fn parse_module(src: &str) -> Result<Module, ParseError> {
    let tokens = tokenize(src).map_err(|error| ParseError {
        span: error.location,
        error: ParseErrorType::LexError { error },
    })?;

    Parser::new(tokens).parse()
}

pub fn parse_module_from_stream(
    stream: impl Iterator<Item = char>,
) -> Result<Module, ParseError> {
    let tokens = tokenize_from(stream.scan(0, |pos, c| {
        *pos += c.len_utf8() as u32;
        Some((*pos - c.len_utf8() as u32, c))
    }))
    .map_err(|error| ParseError {
        span: error.location,
        error: ParseErrorType::LexError { error },
    })?;

    Parser::new(tokens).parse()
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
