pub mod ast;

use crate::{
    lexer::{
        token::{Token, TokenKind, TokenSlice},
        Lexer,
    },
    parser::ast::{Expr, Literal, Operator, OperatorKind, Precedence},
};
use nom::{
    branch::alt,
    bytes::complete::take,
    combinator::{cut, map, peek},
    error::{ErrorKind, ParseError as NomParseError},
    Err, IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("[line {line}] Error at '{lexeme}': Expect {expected}.")]
    UnexpectedToken {
        lexeme: String,
        line: usize,
        expected: &'static str,
    },
    #[error("[line {line}] Error at end: Expect {expected}.")]
    UnexpectedEof { line: usize, expected: &'static str },
}

impl ParseError {
    fn at(input: TokenSlice<'_>, expected: &'static str) -> Self {
        match input.slice.first() {
            Some(token) if token.kind != TokenKind::Eof => ParseError::UnexpectedToken {
                lexeme: token.lexeme.clone(),
                line: token.line,
                expected,
            },
            Some(token) => ParseError::UnexpectedEof {
                line: token.line,
                expected,
            },
            None => ParseError::UnexpectedEof { line: 1, expected },
        }
    }
}

impl<'a> NomParseError<TokenSlice<'a>> for ParseError {
    fn from_error_kind(input: TokenSlice<'a>, _kind: ErrorKind) -> Self {
        Self::at(input, "expression")
    }

    fn append(_input: TokenSlice<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type ParseResult<'a, O> = IResult<TokenSlice<'a>, O, ParseError>;

pub struct Parser;

impl Parser {
    /// Parses a complete token list (normally ending in [`TokenKind::Eof`])
    /// into a single expression.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
        let input = TokenSlice::from_tokens(tokens);

        let (rest, expr) = match Self::parse_expression(input, Precedence::Lowest) {
            Ok(parsed) => parsed,
            Err(Err::Error(e)) | Err(Err::Failure(e)) => return Err(e),
            Err(Err::Incomplete(_)) => return Err(ParseError::at(input, "expression")),
        };

        match rest.slice.first() {
            None
            | Some(Token {
                kind: TokenKind::Eof,
                ..
            }) => Ok(expr),
            Some(_) => Err(ParseError::at(rest, "end of expression")),
        }
    }

    pub fn parse_expression_str(input: &str) -> Result<Expr, crate::Error> {
        let tokens = Lexer::new().lex_input(input)?;

        Ok(Self::parse(&tokens)?)
    }

    fn parse_expression(input: TokenSlice<'_>, precedence: Precedence) -> ParseResult<'_, Expr> {
        let (mut i, mut left) = alt((Self::parse_unary, Self::parse_primary))(input)?;

        while precedence < Self::peek_precedence(i) {
            let (inner_i, inner_left) = Self::parse_infix(i, left)?;
            left = inner_left;
            i = inner_i;
        }

        Ok((i, left))
    }

    fn parse_unary<'a>(input: TokenSlice<'a>) -> ParseResult<'a, Expr> {
        let (i, token) = alt((
            Self::tag(TokenKind::Bang, "expression"),
            Self::tag(TokenKind::Minus, "expression"),
        ))(input)?;
        let (i, right) = cut(|i: TokenSlice<'a>| Self::parse_expression(i, Precedence::Unary))(i)?;

        match Self::operator(token) {
            Some(operator) => Ok((i, Expr::unary(operator, right))),
            None => Err(Err::Failure(ParseError::at(input, "unary operator"))),
        }
    }

    fn parse_primary(input: TokenSlice<'_>) -> ParseResult<'_, Expr> {
        alt((map(Self::parse_literal, Expr::Literal), Self::parse_grouping))(input)
    }

    fn parse_grouping<'a>(input: TokenSlice<'a>) -> ParseResult<'a, Expr> {
        let (i, _) = Self::tag(TokenKind::LeftParen, "expression")(input)?;
        let (i, expr) =
            cut(|i: TokenSlice<'a>| Self::parse_expression(i, Precedence::Lowest))(i)?;
        let (i, _) = cut(Self::tag(TokenKind::RightParen, "')' after expression"))(i)?;

        Ok((i, Expr::grouping(expr)))
    }

    fn parse_literal(input: TokenSlice<'_>) -> ParseResult<'_, Literal> {
        let (i, token) = Self::take_token(input)?;

        let literal = match &token.kind {
            TokenKind::Number(number) => Literal::Number(*number),
            TokenKind::String(s) => Literal::String(s.clone()),
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::Nil => Literal::Nil,
            _ => return Err(Err::Error(ParseError::at(input, "expression"))),
        };

        Ok((i, literal))
    }

    fn parse_infix(input: TokenSlice<'_>, left: Expr) -> ParseResult<'_, Expr> {
        let (i, token) = Self::take_token(input)?;

        if token.kind == TokenKind::Question {
            return Self::parse_ternary(i, left);
        }

        let operator = match Self::operator(token) {
            Some(operator) => operator,
            None => return Err(Err::Error(ParseError::at(input, "operator"))),
        };
        let (i, right) = Self::parse_expression(i, Self::infix_precedence(&token.kind))?;

        Ok((i, Expr::binary(left, operator, right)))
    }

    /// `condition ? if_true : if_false`, right-associative in the else branch.
    fn parse_ternary(input: TokenSlice<'_>, condition: Expr) -> ParseResult<'_, Expr> {
        let (i, if_true) = Self::parse_expression(input, Precedence::Lowest)?;
        let (i, _) = Self::tag(
            TokenKind::Colon,
            "':' after then branch of conditional expression",
        )(i)?;
        let (i, if_false) = Self::parse_expression(i, Precedence::Comma)?;

        Ok((i, Expr::ternary(condition, if_true, if_false)))
    }

    fn operator(token: &Token) -> Option<Operator> {
        let kind = match token.kind {
            TokenKind::Greater => OperatorKind::Greater,
            TokenKind::GreaterEqual => OperatorKind::GreaterEqual,
            TokenKind::Less => OperatorKind::Less,
            TokenKind::LessEqual => OperatorKind::LessEqual,
            TokenKind::Minus => OperatorKind::Minus,
            TokenKind::Star => OperatorKind::Star,
            TokenKind::Slash => OperatorKind::Slash,
            TokenKind::Plus => OperatorKind::Plus,
            TokenKind::BangEqual => OperatorKind::BangEqual,
            TokenKind::EqualEqual => OperatorKind::EqualEqual,
            TokenKind::Comma => OperatorKind::Comma,
            TokenKind::Bang => OperatorKind::Bang,
            _ => return None,
        };

        Some(Operator::new(kind, token.lexeme.clone(), token.line))
    }

    fn infix_precedence(kind: &TokenKind) -> Precedence {
        match kind {
            TokenKind::Comma => Precedence::Comma,
            TokenKind::Question => Precedence::Ternary,
            TokenKind::BangEqual | TokenKind::EqualEqual => Precedence::Equality,
            TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::LessEqual => Precedence::Comparison,
            TokenKind::Minus | TokenKind::Plus => Precedence::Term,
            TokenKind::Slash | TokenKind::Star => Precedence::Factor,
            _ => Precedence::Lowest,
        }
    }

    fn peek_precedence(input: TokenSlice<'_>) -> Precedence {
        match peek(Self::take_token)(input) {
            Ok((_, token)) => Self::infix_precedence(&token.kind),
            _ => Precedence::Lowest,
        }
    }

    fn tag<'a>(
        kind: TokenKind,
        expected: &'static str,
    ) -> impl FnMut(TokenSlice<'a>) -> ParseResult<'a, &'a Token> {
        move |input: TokenSlice<'a>| {
            let (i, token) = Self::take_token(input)?;

            if token.kind == kind {
                Ok((i, token))
            } else {
                Err(Err::Error(ParseError::at(input, expected)))
            }
        }
    }

    fn take_token(input: TokenSlice<'_>) -> ParseResult<'_, &Token> {
        let (i, res) = take::<usize, TokenSlice<'_>, ParseError>(1usize)(input)?;

        match res.slice.first() {
            Some(token) => Ok((i, token)),
            None => Err(Err::Error(ParseError::at(input, "expression"))),
        }
    }
}
