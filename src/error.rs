use crate::{eval::error::RuntimeError, lexer::LexError, parser::ParseError};
use std::io;
use thiserror::Error;

/// Everything that can go wrong between reading source text and printing a
/// result.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// sysexits-style process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Lex(_) | Error::Parse(_) => 65,
            Error::Runtime(_) => 70,
            Error::Io(_) => 74,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::parser::Parser;

    #[test]
    fn exit_codes() {
        let lex = Parser::parse_expression_str("1 $ 2").unwrap_err();
        assert!(matches!(lex, Error::Lex(_)));
        assert_eq!(lex.exit_code(), 65);

        let parse = Parser::parse_expression_str("(1").unwrap_err();
        assert!(matches!(parse, Error::Parse(_)));
        assert_eq!(parse.exit_code(), 65);

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert_eq!(io.exit_code(), 74);
    }
}
