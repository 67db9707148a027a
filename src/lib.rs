pub(crate) mod util;

pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod rpn;

pub use error::Error;
