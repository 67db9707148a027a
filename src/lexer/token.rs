use nom::{InputIter, InputLength, InputTake, Needed};
use std::{iter::Enumerate, slice::Iter};

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Eof,

    // Symbols
    LeftParen,
    RightParen,
    Comma,
    Question,
    Colon,

    // Operators
    Minus,
    Plus,
    Slash,
    Star,
    Bang,
    BangEqual,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Keywords
    True,
    False,
    Nil,

    // Complex Types
    Number(f64),
    String(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TokenSlice<'a> {
    pub slice: &'a [Token],
}

impl<'a> TokenSlice<'a> {
    pub fn from_tokens(tokens: &'a [Token]) -> Self {
        Self { slice: tokens }
    }
}

impl<'a> InputLength for TokenSlice<'a> {
    fn input_len(&self) -> usize {
        self.slice.len()
    }
}

impl<'a> InputTake for TokenSlice<'a> {
    fn take(&self, count: usize) -> Self {
        Self {
            slice: &self.slice[..count],
        }
    }

    fn take_split(&self, count: usize) -> (Self, Self) {
        let (front, back) = self.slice.split_at(count);
        (Self { slice: back }, Self { slice: front })
    }
}

impl<'a> InputIter for TokenSlice<'a> {
    type Item = &'a Token;
    type Iter = Enumerate<Iter<'a, Token>>;
    type IterElem = Iter<'a, Token>;

    fn iter_indices(&self) -> Self::Iter {
        self.slice.iter().enumerate()
    }

    fn iter_elements(&self) -> Self::IterElem {
        self.slice.iter()
    }

    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        self.slice.iter().position(predicate)
    }

    fn slice_index(&self, count: usize) -> Result<usize, Needed> {
        if self.slice.len() >= count {
            Ok(count)
        } else {
            Err(Needed::new(count - self.slice.len()))
        }
    }
}
