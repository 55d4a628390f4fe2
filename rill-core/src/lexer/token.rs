#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter> { <letter> | <digit> | _ }
    Ident(String),
    // { <digit> } [. { <digit> }]
    Number(f64),

    // Keywords
    Let,
    Const,

    // Assignment
    Assign, // =

    // Arithmetic operations
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    Percent,  // %

    // Delimiters
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Colon,     // :
    Semicolon, // ;

    Eof,
}

pub fn str_to_keyword(word: &str) -> Option<Token> {
    Some(match word {
        "let" => Token::Let,
        "const" => Token::Const,
        _ => return None,
    })
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        matches!(self, Token::Let | Token::Const)
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Number(value) => format!("{}", value),

            Token::Let => "let".to_string(),
            Token::Const => "const".to_string(),

            Token::Assign => "=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),

            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::Comma => ",".to_string(),
            Token::Colon => ":".to_string(),
            Token::Semicolon => ";".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}
