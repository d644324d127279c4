use std::fmt;

use log::trace;

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Every comparison operator of the script language. Token kinds narrow
/// this set to what they can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    ApproximatelyEqual,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Operator {
    pub fn symbol(self: &Self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::ApproximatelyEqual => "~",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn is_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n'
}

pub fn skip_whitespace(cur: &mut Cursor) {
    while let Some(ch) = cur.peek() {
        if !is_whitespace(ch) {
            break;
        }
        cur.read();
    }
}

// consumes the second character of a two-character operator if it is `second`
fn follow(cur: &mut Cursor, second: char) -> bool {
    if cur.peek() != Some(second) {
        return false;
    }
    cur.read();
    true
}

pub fn read_operator(cur: &mut Cursor) -> Result<Operator, ParseError> {
    skip_whitespace(cur);
    let position = cur.position();
    let ch = match cur.read() {
        Some(ch1) => ch1,
        None => {
            return Err(ParseError::UnexpectedEnd {
                expected: "comparison operator",
            })
        }
    };
    let op = match ch {
        '=' => {
            follow(cur, '=');
            Operator::Equal
        }
        '~' => {
            follow(cur, '=');
            Operator::ApproximatelyEqual
        }
        '!' => {
            if !follow(cur, '=') {
                return Err(ParseError::UnknownOperator {
                    found: String::from("!"),
                    position,
                });
            }
            Operator::NotEqual
        }
        '<' => {
            if follow(cur, '=') {
                Operator::LessOrEqual
            } else {
                Operator::Less
            }
        }
        '>' => {
            if follow(cur, '=') {
                Operator::GreaterOrEqual
            } else {
                Operator::Greater
            }
        }
        _ => {
            cur.unread(ch);
            return Err(ParseError::UnknownOperator {
                found: ch.to_string(),
                position,
            });
        }
    };
    trace!("operator {} at position {}", op, position);
    Ok(op)
}
