#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod compare;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

pub use compare::{compare, Comparison};
pub use cursor::Cursor;
pub use error::ParseError;
pub use lexer::Operator;
pub use options::MatchOptions;
pub use token::{StringToken, Token};
