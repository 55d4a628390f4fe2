use crate::environment::prelude::{BindingError, ValueType};
use crate::parser::prelude::BinaryOperator;
use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    Binding { error: BindingError },
    InvalidAssignmentTarget,
    UnsupportedOperands {
        operator: BinaryOperator,
        left: ValueType,
        right: ValueType,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan,
}

impl RuntimeError {
    pub fn details(&self) -> (String, Vec<String>) {
        match &self.error {
            RuntimeErrorType::Binding { error } => (format!("{error}"), vec![]),
            RuntimeErrorType::InvalidAssignmentTarget => (
                "Invalid assignment target".to_string(),
                vec!["Only an identifier can be assigned to.".to_string()],
            ),
            RuntimeErrorType::UnsupportedOperands {
                operator,
                left,
                right,
            } => (
                format!("Cannot apply `{operator}` to these operands"),
                vec![format!(
                    "The `{operator}` operator expects two Numbers, found {left} and {right}."
                )],
            ),
        }
    }
}
