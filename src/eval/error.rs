use crate::parser::ast::Operator;
use thiserror::Error;

pub const OPERAND_MUST_BE_NUMBER: &str = "Operand must be a number.";
pub const OPERANDS_MUST_BE_NUMBERS: &str = "Operands must be numbers.";
pub const OPERANDS_MUST_BE_NUMBERS_OR_STRINGS: &str =
    "Only numbers and strings can be used as operands";
pub const DIVISION_BY_ZERO: &str = "Division by zero error";

/// An error raised while evaluating an expression. Carries the operator that
/// triggered it so the report can point at the source line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("{message}\n[line {line}]", line = .operator.line)]
    Type {
        operator: Operator,
        message: &'static str,
    },
    #[error("{}\n[line {line}]", DIVISION_BY_ZERO, line = .operator.line)]
    DivisionByZero { operator: Operator },
}

impl RuntimeError {
    pub fn type_error(operator: &Operator, message: &'static str) -> Self {
        RuntimeError::Type {
            operator: operator.clone(),
            message,
        }
    }

    pub fn division_by_zero(operator: &Operator) -> Self {
        RuntimeError::DivisionByZero {
            operator: operator.clone(),
        }
    }

    pub fn operator(&self) -> &Operator {
        match self {
            RuntimeError::Type { operator, .. } | RuntimeError::DivisionByZero { operator } => {
                operator
            }
        }
    }

    pub fn line(&self) -> usize {
        self.operator().line
    }

    pub fn message(&self) -> &'static str {
        match self {
            RuntimeError::Type { message, .. } => message,
            RuntimeError::DivisionByZero { .. } => DIVISION_BY_ZERO,
        }
    }
}
