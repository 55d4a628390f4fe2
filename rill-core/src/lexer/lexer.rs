use crate::utils::prelude::SrcSpan;

use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_keyword, Token};

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
    position: u32,
    next_position: u32,
    ch: Option<char>,
    next_ch: Option<char>,
    input: T,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
    pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
            next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

    pub fn next_token(&mut self) -> LexResult {
        let span = match self.ch {
            Some(ch) => match ch {
                '=' => self.eat_one_char(Token::Assign),
                '+' => self.eat_one_char(Token::Plus),
                '-' => self.eat_one_char(Token::Minus),
                '*' => self.eat_one_char(Token::Asterisk),
                '/' => self.eat_one_char(Token::Slash),
                '%' => self.eat_one_char(Token::Percent),
                '(' => self.eat_one_char(Token::LParen),
                ')' => self.eat_one_char(Token::RParen),
                '{' => self.eat_one_char(Token::LBrace),
                '}' => self.eat_one_char(Token::RBrace),
                ',' => self.eat_one_char(Token::Comma),
                ':' => self.eat_one_char(Token::Colon),
                ';' => self.eat_one_char(Token::Semicolon),
                'a'..='z' | 'A'..='Z' | '_' => return Ok(self.lex_ident()),
                '0'..='9' => return self.lex_number(),
                '\n' | ' ' | '\t' | '\x0C' | '\r' => {
                    self.next_char();
                    return self.next_token();
                }
                c => {
                    let location = self.position;
                    return Err(LexicalError {
                        error: LexicalErrorType::UnrecognizedCharacter { ch: c },
                        location: SrcSpan {
                            start: location,
                            end: location + c.len_utf8() as u32,
                        },
                    });
                }
            },
            None => self.eat_one_char(Token::Eof),
        };

        Ok(span)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.ch;

        let next = match self.input.next() {
            Some((pos, ch)) => {
                self.position = self.next_position;
                self.next_position = pos;

                Some(ch)
            }
            None => {
                self.position = self.next_position;
                self.next_position += 1;

                None
            }
        };

        self.ch = self.next_ch;
        self.next_ch = next;

        ch
    }

    fn eat_one_char(&mut self, token: Token) -> Spanned {
        let start_pos = self.position;
        self.next_char();
        let end_pos = self.position;

        (start_pos, token, end_pos)
    }

    fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
        let mut ident = String::new();

        loop {
            match self.ch {
                Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => {
                    ident.push(self.next_char().unwrap())
                }
                _ => break,
            }
        }

        let end_pos = self.position;

        let token = match str_to_keyword(&ident) {
            Some(token) => token,
            None => Token::Ident(ident),
        };

        (start_pos, token, end_pos)
    }

    fn lex_number(&mut self) -> LexResult {
        let start_pos = self.position;
        let mut value = String::new();
        let mut has_period = false;

        loop {
            match self.ch {
                Some(ch) if ch.is_ascii_digit() => value.push(self.next_char().unwrap()),
                Some('.') => {
                    if has_period {
                        let _ = self.next_char();

                        return Err(LexicalError {
                            error: LexicalErrorType::MultipleFloatingPoints,
                            location: SrcSpan::from(start_pos, self.position),
                        });
                    }

                    if !matches!(self.next_ch, Some(ch) if ch.is_ascii_digit()) {
                        let _ = self.next_char();

                        return Err(LexicalError {
                            error: LexicalErrorType::MissingDigitAfterPeriod,
                            location: SrcSpan::from(start_pos, self.position),
                        });
                    }

                    has_period = true;
                    value.push(self.next_char().unwrap());
                }
                _ => break,
            }
        }

        let end_pos = self.position;

        match value.parse::<f64>() {
            Ok(number) => Ok((start_pos, Token::Number(number), end_pos)),
            Err(_) => Err(LexicalError {
                error: LexicalErrorType::InvalidNumber,
                location: SrcSpan::from(start_pos, end_pos),
            }),
        }
    }
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
    type Item = LexResult;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }
}

/// Runs the lexer over a full source string. The returned sequence always
/// ends with exactly one `Eof` token.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexicalError> {
    tokenize_from(src.char_indices().map(|(i, c)| (i as u32, c)))
}

pub fn tokenize_from(
    input: impl Iterator<Item = (u32, char)>,
) -> Result<Vec<Spanned>, LexicalError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = vec![];

    loop {
        let spanned = lexer.next_token()?;
        let is_eof = spanned.1 == Token::Eof;

        tokens.push(spanned);

        if is_eof {
            break;
        }
    }

    Ok(tokens)
}
