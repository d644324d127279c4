use thiserror::Error;

use crate::lexer::Operator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown comparison operator {found:?} at position {position}")]
    UnknownOperator { found: String, position: usize },
    #[error("unsupported comparison type {0}")]
    UnsupportedOperator(Operator),
    #[error("expected string beginning, {} ({found:?}) found at position {position}", code_point(.found))]
    ExpectedString { found: char, position: usize },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unterminated string {literal:?} at position {position}")]
    UnterminatedString { literal: String, position: usize },
    #[error("token already parsed")]
    AlreadyParsed,
    #[error("token unusable after a failed parse")]
    Unusable,
}

fn code_point(ch: &char) -> u32 {
    *ch as u32
}
