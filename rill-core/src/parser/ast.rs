use std::fmt::Display;

use crate::lexer::prelude::Token;
use crate::parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser};
use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub program: Program,
}

// program -> { <statement> }
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub location: SrcSpan,
}

impl Parse for Program {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let start = parser.current().0;
        let mut statements = vec![];

        while !parser.at_eof() {
            statements.push(Statement::parse(parser)?);
        }

        let end = match statements.last() {
            Some(statement) => statement.location().end,
            None => start,
        };

        Ok(Self {
            statements,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self
            .statements
            .iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join("; "))
    }
}

// statement -> <var_declaration> ; | <expression> ;
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarDeclaration(VarDeclaration),
    Expression(Expression),
}

impl Parse for Statement {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        match parser.current_token() {
            Token::Let | Token::Const => {
                Ok(Self::VarDeclaration(VarDeclaration::parse(parser)?))
            }
            _ => {
                let expression = Expression::parse(parser)?;

                // The terminator is optional for the last statement only.
                if !parser.at_eof() {
                    if let Err(err) = parser.expect_one(Token::Semicolon) {
                        return parse_error(ParseErrorType::MissingSemicolon, err.span);
                    }
                }

                Ok(Self::Expression(expression))
            }
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VarDeclaration(declaration) => write!(f, "{declaration}"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::VarDeclaration(declaration) => declaration.location,
            Self::Expression(expression) => expression.location(),
        }
    }
}

// var_declaration -> (let | const) <identifier> [= <expression>] ;
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub name: Identifier,
    pub value: Option<Expression>,
    pub constant: bool,
    pub location: SrcSpan,
}

impl Parse for VarDeclaration {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let (start, keyword, _) = parser.next_token();
        let constant = keyword == Token::Const;

        let name = Identifier::from(parser.expect_ident()?);

        if matches!(parser.current_token(), Token::Semicolon) {
            let (_, end) = parser.expect_one(Token::Semicolon)?;
            let location = SrcSpan { start, end };

            if constant {
                return parse_error(ParseErrorType::UninitializedConstant, location);
            }

            return Ok(Self {
                name,
                value: None,
                constant: false,
                location,
            });
        }

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser)?;

        let end = match parser.expect_one(Token::Semicolon) {
            Ok((_, end)) => end,
            Err(err) => return parse_error(ParseErrorType::MissingSemicolon, err.span),
        };

        Ok(Self {
            name,
            value: Some(value),
            constant,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.constant { "const" } else { "let" };

        match &self.value {
            Some(value) => write!(f, "{} {} = {}", keyword, self.name, value),
            None => write!(f, "{} {}", keyword, self.name),
        }
    }
}

// expression -> <assignment>
// assignment -> <object> [= <assignment>]
// object     -> { <property> {, <property>} } | <additive>
// additive   -> <multiplicative> {(+ | -) <multiplicative>}
// multiplicative -> <primary> {(* | / | %) <primary>}
// primary    -> <identifier> | <number> | ( <expression> )
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    NumericLiteral { value: f64, location: SrcSpan },
    Binary(Binary),
    Assignment(Assignment),
    Object(ObjectLiteral),
}

impl Parse for Expression {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Self::parse_assignment(parser)
    }
}

impl Expression {
    // Right-associative: the right-hand side recurses back into
    // assignment, not into a lower level. The target is whatever the
    // left side parsed to; validating it is the evaluator's job.
    fn parse_assignment(parser: &mut Parser) -> Result<Self, ParseError> {
        let target = Self::parse_object(parser)?;

        if matches!(parser.current_token(), Token::Assign) {
            parser.step();

            let value = Self::parse_assignment(parser)?;
            let location = SrcSpan {
                start: target.location().start,
                end: value.location().end,
            };

            return Ok(Self::Assignment(Assignment {
                target: Box::new(target),
                value: Box::new(value),
                location,
            }));
        }

        Ok(target)
    }

    fn parse_object(parser: &mut Parser) -> Result<Self, ParseError> {
        if matches!(parser.current_token(), Token::LBrace) {
            return Ok(Self::Object(ObjectLiteral::parse(parser)?));
        }

        Self::parse_additive(parser)
    }

    fn parse_additive(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut left = Self::parse_multiplicative(parser)?;

        loop {
            let operator = match parser.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            parser.step();

            let right = Self::parse_multiplicative(parser)?;

            left = Self::fold_binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_multiplicative(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut left = Self::parse_primary(parser)?;

        loop {
            let operator = match parser.current_token() {
                Token::Asterisk => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                Token::Percent => BinaryOperator::Modulo,
                _ => break,
            };
            parser.step();

            let right = Self::parse_primary(parser)?;

            left = Self::fold_binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_primary(parser: &mut Parser) -> Result<Self, ParseError> {
        match parser.current_token() {
            Token::Ident(_) => {
                let ident = parser.expect_ident()?;

                Ok(Self::Identifier(Identifier::from(ident)))
            }
            Token::Number(_) => {
                let (start, token, end) = parser.next_token();

                let value = match token {
                    Token::Number(value) => value,
                    _ => unreachable!("current token checked to be a number"),
                };

                Ok(Self::NumericLiteral {
                    value,
                    location: SrcSpan { start, end },
                })
            }
            // Grouping only: the parentheses are discarded and the
            // inner expression is returned as-is.
            Token::LParen => {
                parser.step();

                let expression = Expression::parse(parser)?;
                parser.expect_one(Token::RParen)?;

                Ok(expression)
            }
            Token::Eof => {
                let (start, _, end) = parser.current();

                parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan {
                        start: *start,
                        end: *end,
                    },
                )
            }
            token => {
                let (start, _, end) = parser.current();

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: token.clone(),
                        expected: vec!["an Identifier, Number, `{` or `(`".to_string()],
                    },
                    SrcSpan {
                        start: *start,
                        end: *end,
                    },
                )
            }
        }
    }

    fn fold_binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
        let location = SrcSpan {
            start: left.location().start,
            end: right.location().end,
        };

        Self::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location,
        })
    }

    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(ident) => ident.location,
            Self::NumericLiteral { location, .. } => *location,
            Self::Binary(binary) => binary.location,
            Self::Assignment(assignment) => assignment.location,
            Self::Object(object) => object.location,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::NumericLiteral { value, .. } => write!(f, "{value}"),
            Self::Binary(binary) => write!(f, "{binary}"),
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Object(object) => write!(f, "{object}"),
        }
    }
}

// binary -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan,
}

impl Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// assignment -> <expression> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub location: SrcSpan,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

// object -> { [<property> {, <property>}] }
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
    pub location: SrcSpan,
}

impl Parse for ObjectLiteral {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::LBrace)?;

        let mut properties = vec![];

        if !matches!(parser.current_token(), Token::RBrace) {
            loop {
                let key = Identifier::from(parser.expect_ident()?);

                // A bare key is shorthand for looking up a binding of
                // the same name.
                let property = match parser.current_token() {
                    Token::Colon => {
                        parser.step();

                        let value = Expression::parse(parser)?;
                        let location = SrcSpan {
                            start: key.location.start,
                            end: value.location().end,
                        };

                        Property {
                            key,
                            value: Some(value),
                            location,
                        }
                    }
                    _ => Property {
                        location: key.location,
                        key,
                        value: None,
                    },
                };

                properties.push(property);

                // No trailing comma, every comma must be followed by
                // another property.
                match parser.current_token() {
                    Token::Comma => parser.step(),
                    _ => break,
                }
            }
        }

        let (_, end) = parser.expect_one(Token::RBrace)?;

        Ok(Self {
            properties,
            location: SrcSpan { start, end },
        })
    }
}

impl Display for ObjectLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.properties.is_empty() {
            return write!(f, "{{}}");
        }

        let properties = self
            .properties
            .iter()
            .map(|property| property.to_string())
            .collect::<Vec<String>>();

        write!(f, "{{ {} }}", properties.join(", "))
    }
}

// property -> <identifier> [: <expression>]
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Identifier,
    pub value: Option<Expression>,
    pub location: SrcSpan,
}

impl Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}

// identifier -> <letter> { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan {
                start: value.0,
                end: value.2,
            },
        }
    }
}
