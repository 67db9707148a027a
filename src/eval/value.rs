use crate::{parser::ast::Literal, util::format_number};
use std::fmt::{self, Display};

/// A runtime value. Equality is value equality within one kind; values of
/// different kinds are never equal and `Nil` only equals `Nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// `nil` and `false` are falsey, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Boolean(b) => *b,
            _ => true,
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(number) => Value::Number(*number),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Bool(b) => Value::Boolean(*b),
            Literal::Nil => Value::Nil,
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(number) => write!(f, "{}", format_number(*number)),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    #[test]
    fn stringify() {
        let test_data = vec![
            (Value::Number(3.0), "3"),
            (Value::Number(3.5), "3.5"),
            (Value::Nil, "nil"),
            (Value::Boolean(true), "true"),
            (Value::Boolean(false), "false"),
            (Value::from("lox"), "lox"),
        ];

        test_data.into_iter().for_each(|(value, expected)| {
            assert_eq!(value.to_string(), expected);
        });
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::from("").is_truthy());
    }

    #[test]
    fn equality() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_eq!(Value::from(1.0), Value::from(1.0));
        assert_eq!(Value::from("a"), Value::from("a"));
        assert_ne!(Value::Nil, Value::Boolean(false));
        assert_ne!(Value::from(1.0), Value::from("1"));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }
}
