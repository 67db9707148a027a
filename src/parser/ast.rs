use crate::util::format_number;
use std::{fmt, fmt::Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Grouping(Box<Expr>),
    Unary(Operator, Box<Expr>),
    Binary(Box<Expr>, Operator, Box<Expr>),
    Ternary {
        condition: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(literal: impl Into<Literal>) -> Self {
        Expr::Literal(literal.into())
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Operator, right: Expr) -> Self {
        Expr::Unary(operator, Box::new(right))
    }

    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Binary(Box::new(left), operator, Box::new(right))
    }

    pub fn ternary(condition: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl From<f64> for Literal {
    fn from(number: f64) -> Self {
        Literal::Number(number)
    }
}

impl From<&str> for Literal {
    fn from(string: &str) -> Self {
        Literal::String(string.to_string())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(number) => write!(f, "{}", format_number(*number)),
            Literal::String(s) => write!(f, "{}", s),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Nil => write!(f, "nil"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperatorKind {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Minus,
    Star,
    Slash,
    Plus,
    BangEqual,
    EqualEqual,
    Comma,
    Bang,
}

impl OperatorKind {
    /// The canonical source spelling of the operator.
    pub fn lexeme(self) -> &'static str {
        match self {
            OperatorKind::Greater => ">",
            OperatorKind::GreaterEqual => ">=",
            OperatorKind::Less => "<",
            OperatorKind::LessEqual => "<=",
            OperatorKind::Minus => "-",
            OperatorKind::Star => "*",
            OperatorKind::Slash => "/",
            OperatorKind::Plus => "+",
            OperatorKind::BangEqual => "!=",
            OperatorKind::EqualEqual => "==",
            OperatorKind::Comma => ",",
            OperatorKind::Bang => "!",
        }
    }
}

/// An operator together with where it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    pub kind: OperatorKind,
    pub lexeme: String,
    pub line: usize,
}

impl Operator {
    pub fn new(kind: OperatorKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Builds an operator spelled the canonical way, on the given line.
    pub fn at_line(kind: OperatorKind, line: usize) -> Self {
        Self::new(kind, kind.lexeme(), line)
    }
}

impl From<OperatorKind> for Operator {
    fn from(kind: OperatorKind) -> Self {
        Self::at_line(kind, 1)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, PartialOrd, PartialEq, Clone, Copy)]
pub enum Precedence {
    Lowest,
    Comma,
    Ternary,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
}
