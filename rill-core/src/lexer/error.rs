use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
    MultipleFloatingPoints,
    MissingDigitAfterPeriod,
    InvalidNumber,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan,
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedCharacter { .. } => {
                ("Unrecognized character in input", vec![])
            }
            LexicalErrorType::MultipleFloatingPoints => {
                ("Found more than one decimal point in a number", vec![])
            }
            LexicalErrorType::MissingDigitAfterPeriod => {
                ("Missing digit after decimal point", vec![])
            }
            LexicalErrorType::InvalidNumber => {
                ("Number cannot be represented as a float", vec![])
            }
        }
    }
}
