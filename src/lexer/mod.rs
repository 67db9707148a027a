pub mod token;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{alpha1, char, digit1, multispace1, not_line_ending},
    combinator::{map, map_opt, map_res, opt, peek, recognize},
    error::{FromExternalError, ParseError, VerboseError},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use std::num::ParseFloatError;
use thiserror::Error;
use token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("[line {line}] Error: Unexpected character '{character}'.")]
    UnexpectedCharacter { character: char, line: usize },
    #[error("[line {line}] Error: Unexpected identifier '{identifier}'.")]
    UnexpectedIdentifier { identifier: String, line: usize },
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },
}

pub struct Lexer;

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self
    }

    /// Splits `input` into tokens, always terminated by [`TokenKind::Eof`].
    #[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
    pub fn lex_input(&self, input: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut line = 1;
        let mut rest = input;

        loop {
            if let Ok((after, trivia)) = Self::trivia::<VerboseError<&str>>(rest) {
                line += trivia.matches('\n').count();
                rest = after;
            }

            if rest.is_empty() {
                break;
            }

            match Self::token::<VerboseError<&str>>(rest) {
                Ok((remaining, kind)) => {
                    let lexeme = &rest[..rest.len() - remaining.len()];
                    tokens.push(Token::new(kind, lexeme, line));
                    line += lexeme.matches('\n').count();
                    rest = remaining;
                }
                Err(_) => return Err(Self::lex_error(rest, line)),
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", line));
        tracing::trace!(count = tokens.len(), "lexed input");

        Ok(tokens)
    }

    fn lex_error(rest: &str, line: usize) -> LexError {
        if rest.starts_with('"') {
            return LexError::UnterminatedString { line };
        }

        match Self::identifier::<VerboseError<&str>>(rest) {
            Ok((_, identifier)) => LexError::UnexpectedIdentifier {
                identifier: identifier.to_string(),
                line,
            },
            Err(_) => LexError::UnexpectedCharacter {
                character: rest.chars().next().unwrap_or_default(),
                line,
            },
        }
    }

    fn token<'a, E>(i: &'a str) -> IResult<&'a str, TokenKind, E>
    where
        E: ParseError<&'a str> + FromExternalError<&'a str, ParseFloatError>,
    {
        let symbol_parsers = alt((
            Self::static_token_lexer_generator::<E>("!=", TokenKind::BangEqual),
            Self::static_token_lexer_generator::<E>("==", TokenKind::EqualEqual),
            Self::static_token_lexer_generator::<E>(">=", TokenKind::GreaterEqual),
            Self::static_token_lexer_generator::<E>("<=", TokenKind::LessEqual),
            Self::static_token_lexer_generator::<E>("!", TokenKind::Bang),
            Self::static_token_lexer_generator::<E>(">", TokenKind::Greater),
            Self::static_token_lexer_generator::<E>("<", TokenKind::Less),
            Self::static_token_lexer_generator::<E>("+", TokenKind::Plus),
            Self::static_token_lexer_generator::<E>("-", TokenKind::Minus),
            Self::static_token_lexer_generator::<E>("*", TokenKind::Star),
            Self::static_token_lexer_generator::<E>("/", TokenKind::Slash),
            Self::static_token_lexer_generator::<E>("(", TokenKind::LeftParen),
            Self::static_token_lexer_generator::<E>(")", TokenKind::RightParen),
            Self::static_token_lexer_generator::<E>(",", TokenKind::Comma),
            Self::static_token_lexer_generator::<E>("?", TokenKind::Question),
            Self::static_token_lexer_generator::<E>(":", TokenKind::Colon),
        ));

        alt((
            Self::number_lexer::<E>(),
            Self::string_lexer::<E>(),
            Self::keyword_lexer::<E>(),
            symbol_parsers,
        ))(i)
    }

    fn static_token_lexer_generator<'a, E>(
        symbol: &'a str,
        token: TokenKind,
    ) -> impl FnMut(&'a str) -> IResult<&'a str, TokenKind, E>
    where
        E: ParseError<&'a str>,
    {
        map(tag(symbol), move |_| token.clone())
    }

    fn keyword_lexer<'a, E>() -> impl FnMut(&'a str) -> IResult<&'a str, TokenKind, E>
    where
        E: ParseError<&'a str>,
    {
        map_opt(Self::identifier::<E>, |word: &str| match word {
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "nil" => Some(TokenKind::Nil),
            _ => None,
        })
    }

    fn identifier<'a, E>(i: &'a str) -> IResult<&'a str, &'a str, E>
    where
        E: ParseError<&'a str>,
    {
        preceded(
            peek(alt((alpha1, tag("_")))),
            take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        )(i)
    }

    fn number_lexer<'a, E>() -> impl FnMut(&'a str) -> IResult<&'a str, TokenKind, E>
    where
        E: ParseError<&'a str> + FromExternalError<&'a str, ParseFloatError>,
    {
        map_res(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            |number: &str| number.parse::<f64>().map(TokenKind::Number),
        )
    }

    fn string_lexer<'a, E>() -> impl FnMut(&'a str) -> IResult<&'a str, TokenKind, E>
    where
        E: ParseError<&'a str>,
    {
        map(
            delimited(char('"'), take_till(|c| c == '"'), char('"')),
            |string: &str| TokenKind::String(string.to_string()),
        )
    }

    /// Whitespace and `//` comments.
    fn trivia<'a, E>(i: &'a str) -> IResult<&'a str, &'a str, E>
    where
        E: ParseError<&'a str>,
    {
        recognize(many0(alt((
            multispace1,
            recognize(pair(tag("//"), not_line_ending)),
        ))))(i)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nom::{
        error::{Error as NomError, ErrorKind},
        Err::Error,
    };
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new()
            .lex_input(input)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn tokens_simple() {
        let input = "(),?:-+/*";

        let expected_tokens = vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Comma,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Eof,
        ];

        assert_eq!(kinds(input), expected_tokens);
    }

    #[test]
    fn tokens_complex() {
        let input = r#"!(1 >= 2.5) != true == false,
"lox" < nil ? 3 <= 4 : -5 > 6 // trailing comment
"#;

        let expected_tokens = vec![
            TokenKind::Bang,
            TokenKind::LeftParen,
            TokenKind::Number(1.0),
            TokenKind::GreaterEqual,
            TokenKind::Number(2.5),
            TokenKind::RightParen,
            TokenKind::BangEqual,
            TokenKind::True,
            TokenKind::EqualEqual,
            TokenKind::False,
            TokenKind::Comma,
            TokenKind::String("lox".to_string()),
            TokenKind::Less,
            TokenKind::Nil,
            TokenKind::Question,
            TokenKind::Number(3.0),
            TokenKind::LessEqual,
            TokenKind::Number(4.0),
            TokenKind::Colon,
            TokenKind::Minus,
            TokenKind::Number(5.0),
            TokenKind::Greater,
            TokenKind::Number(6.0),
            TokenKind::Eof,
        ];

        assert_eq!(kinds(input), expected_tokens);
    }

    #[test]
    fn lexemes_and_lines() {
        let input = "1 +\n\"two\nlines\" *\n\n3";

        let expected = vec![
            Token::new(TokenKind::Number(1.0), "1", 1),
            Token::new(TokenKind::Plus, "+", 1),
            Token::new(
                TokenKind::String("two\nlines".to_string()),
                "\"two\nlines\"",
                2,
            ),
            Token::new(TokenKind::Star, "*", 3),
            Token::new(TokenKind::Number(3.0), "3", 5),
            Token::new(TokenKind::Eof, "", 5),
        ];

        assert_eq!(Lexer::new().lex_input(input).unwrap(), expected);
    }

    #[test]
    fn empty_input() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("   // only a comment"), vec![TokenKind::Eof]);
    }

    #[test]
    fn lex_errors() {
        let test_data = vec![
            (
                "1 + @",
                LexError::UnexpectedCharacter {
                    character: '@',
                    line: 1,
                },
            ),
            (
                "1 +\n\"open",
                LexError::UnterminatedString { line: 2 },
            ),
            (
                "truthy",
                LexError::UnexpectedIdentifier {
                    identifier: "truthy".to_string(),
                    line: 1,
                },
            ),
            (
                "1 = 2",
                LexError::UnexpectedCharacter {
                    character: '=',
                    line: 1,
                },
            ),
        ];

        test_data.into_iter().for_each(|(input, expected)| {
            assert_eq!(Lexer::new().lex_input(input), Err(expected));
        });
    }

    #[test]
    fn keyword_parser_test() {
        let inputs = vec![
            ("true", Ok(("", TokenKind::True))),
            ("nil)", Ok((")", TokenKind::Nil))),
            ("+=", Err(Error(NomError::new("+=", ErrorKind::Tag)))),
            (
                "1nvalid_ident",
                Err(Error(NomError::new("1nvalid_ident", ErrorKind::Tag))),
            ),
        ];

        inputs.into_iter().for_each(|input| {
            let result: IResult<&str, TokenKind> = Lexer::keyword_lexer()(input.0);

            assert_eq!(result, input.1);
        });
    }
}
