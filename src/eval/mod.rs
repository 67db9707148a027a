use crate::{
    error::Error,
    parser::ast::{Expr, Operator, OperatorKind},
};
use std::io::Write;

pub mod error;
pub mod value;

use error::{
    RuntimeError, OPERANDS_MUST_BE_NUMBERS, OPERANDS_MUST_BE_NUMBERS_OR_STRINGS,
    OPERAND_MUST_BE_NUMBER,
};
use value::Value;

pub type EvalResult = Result<Value, RuntimeError>;

/// Tree-walking evaluator. Holds no state, so one instance can evaluate any
/// number of trees, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `expr` and writes the stringified result as one line to
    /// `out`. Nothing is written when evaluation fails.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret<W: Write>(&self, expr: &Expr, out: &mut W) -> Result<(), Error> {
        match self.evaluate(expr) {
            Ok(value) => {
                writeln!(out, "{}", value)?;
                Ok(())
            }
            Err(error) => {
                tracing::debug!(line = error.line(), message = error.message(), "runtime error");
                Err(error.into())
            }
        }
    }

    pub fn evaluate(&self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(lit) => Ok(Value::from(lit)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary(operator, right) => {
                let right = self.evaluate(right)?;
                self.eval_unary_expr(operator, right)
            }
            Expr::Binary(left, operator, right) => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.eval_binary_expr(operator, left, right)
            }
            Expr::Ternary {
                condition,
                if_true,
                if_false,
            } => self.eval_ternary_expr(condition, if_true, if_false),
        }
    }

    fn eval_unary_expr(&self, operator: &Operator, right: Value) -> EvalResult {
        match (operator.kind, right) {
            (OperatorKind::Bang, right) => Ok(Value::Boolean(!right.is_truthy())),
            (OperatorKind::Minus, Value::Number(n)) => Ok(Value::Number(-n)),
            (OperatorKind::Minus, _) => Err(RuntimeError::type_error(
                operator,
                OPERAND_MUST_BE_NUMBER,
            )),
            (kind, _) => {
                tracing::trace!(?kind, "operator has no prefix form");
                Ok(Value::Nil)
            }
        }
    }

    fn eval_binary_expr(&self, operator: &Operator, left: Value, right: Value) -> EvalResult {
        match operator.kind {
            OperatorKind::Greater
            | OperatorKind::GreaterEqual
            | OperatorKind::Less
            | OperatorKind::LessEqual
            | OperatorKind::Minus
            | OperatorKind::Star
            | OperatorKind::Slash => match (left, right) {
                (Value::Number(left), Value::Number(right)) => {
                    self.eval_number_expr(operator, left, right)
                }
                _ => Err(RuntimeError::type_error(
                    operator,
                    OPERANDS_MUST_BE_NUMBERS,
                )),
            },
            OperatorKind::Plus => self.eval_plus_expr(operator, left, right),
            OperatorKind::BangEqual => Ok(Value::Boolean(left != right)),
            OperatorKind::EqualEqual => Ok(Value::Boolean(left == right)),
            OperatorKind::Comma => Ok(right),
            OperatorKind::Bang => {
                tracing::trace!(kind = ?operator.kind, "operator has no infix form");
                Ok(Value::Nil)
            }
        }
    }

    fn eval_number_expr(&self, operator: &Operator, left: f64, right: f64) -> EvalResult {
        let value = match operator.kind {
            OperatorKind::Greater => Value::Boolean(left > right),
            OperatorKind::GreaterEqual => Value::Boolean(left >= right),
            OperatorKind::Less => Value::Boolean(left < right),
            OperatorKind::LessEqual => Value::Boolean(left <= right),
            OperatorKind::Minus => Value::Number(left - right),
            OperatorKind::Star => Value::Number(left * right),
            OperatorKind::Slash if right == 0.0 => {
                return Err(RuntimeError::division_by_zero(operator))
            }
            OperatorKind::Slash => Value::Number(left / right),
            _ => Value::Nil,
        };

        Ok(value)
    }

    fn eval_plus_expr(&self, operator: &Operator, left: Value, right: Value) -> EvalResult {
        match (left, right) {
            (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
            (Value::String(left), Value::String(right)) => Ok(Value::String(left + &right)),
            (Value::String(left), right @ Value::Number(_)) => {
                Ok(Value::String(format!("{}{}", left, right)))
            }
            (left @ Value::Number(_), Value::String(right)) => {
                Ok(Value::String(format!("{}{}", left, right)))
            }
            _ => Err(RuntimeError::type_error(
                operator,
                OPERANDS_MUST_BE_NUMBERS_OR_STRINGS,
            )),
        }
    }

    /// Only the selected branch is evaluated.
    fn eval_ternary_expr(&self, condition: &Expr, if_true: &Expr, if_false: &Expr) -> EvalResult {
        if self.evaluate(condition)?.is_truthy() {
            self.evaluate(if_true)
        } else {
            self.evaluate(if_false)
        }
    }
}
