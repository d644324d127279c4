use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::compare::{compare, Comparison};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lexer::{read_operator, skip_whitespace, Operator};
use crate::options::MatchOptions;

/// A predicate of the script language: parsed once from the script text,
/// then applied to any number of subjects.
pub trait Token<T> {
    fn parse(&mut self, cur: &mut Cursor) -> Result<(), ParseError>;

    fn apply(&self, subject: &T) -> bool;
}

struct Parsed {
    cmp: Comparison,
    literal: String,
}

enum State {
    Unparsed,
    Parsed(Parsed),
    Failed,
}

/// Compares a string attribute of `T`, obtained through `extractor`, with a
/// quoted literal: `== "Steel Sword"`, `!= "Stick"`, `~ "*sword*"`.
pub struct StringToken<T, F> {
    extractor: F,
    ignore_case: bool,
    state: State,
    subject: PhantomData<fn(&T) -> bool>,
}

impl<T, F> StringToken<T, F>
where
    F: Fn(&T) -> String,
{
    pub fn new(extractor: F, ignore_case: bool) -> Self {
        StringToken {
            extractor,
            ignore_case,
            state: State::Unparsed,
            subject: PhantomData,
        }
    }

    pub fn with_options(extractor: F, options: MatchOptions) -> Self {
        Self::new(extractor, options.ignore_case)
    }

    /// Builds a token and parses it from `text`.
    pub fn parse_str(extractor: F, ignore_case: bool, text: &str) -> Result<Self, ParseError> {
        let mut token = Self::new(extractor, ignore_case);
        let mut it = text.chars();
        let mut cur = Cursor::new(&mut it);
        token.parse(&mut cur)?;
        Ok(token)
    }

    fn parsed(self: &Self) -> Option<&Parsed> {
        match &self.state {
            State::Parsed(p) => Some(p),
            _ => None,
        }
    }

    pub fn comparison(self: &Self) -> Option<Comparison> {
        self.parsed().map(|p| p.cmp)
    }

    pub fn literal(self: &Self) -> Option<&str> {
        self.parsed().map(|p| p.literal.as_str())
    }

    pub fn ignores_case(self: &Self) -> bool {
        self.ignore_case
    }

    pub fn is_parsed(self: &Self) -> bool {
        self.parsed().is_some()
    }

    /// Subjects for which the token holds.
    pub fn filter<'s>(self: &'s Self, subjects: &'s [T]) -> impl Iterator<Item = &'s T> + 's {
        subjects.iter().filter(move |subject| self.apply(subject))
    }
}

fn read_literal(cur: &mut Cursor) -> Result<String, ParseError> {
    skip_whitespace(cur);
    let position = cur.position();
    match cur.read() {
        Some('"') => {}
        Some(ch) => return Err(ParseError::ExpectedString { found: ch, position }),
        None => {
            return Err(ParseError::UnexpectedEnd {
                expected: "string beginning",
            })
        }
    }
    let mut s = String::new();
    loop {
        match cur.read() {
            Some('"') => break,
            Some(ch) => s.push(ch),
            None => {
                return Err(ParseError::UnterminatedString {
                    literal: s,
                    position,
                })
            }
        }
    }
    trace!("literal {:?} at position {}", s, position);
    Ok(s)
}

fn parse_comparison(cur: &mut Cursor) -> Result<Parsed, ParseError> {
    let cmp = Comparison::try_from(read_operator(cur)?)?;
    let literal = read_literal(cur)?;
    skip_whitespace(cur);
    Ok(Parsed { cmp, literal })
}

impl<T, F> Token<T> for StringToken<T, F>
where
    F: Fn(&T) -> String,
{
    /// Reads `<operator> "<literal>"` and the whitespace after it. A token
    /// is parsed at most once: later calls fail with `AlreadyParsed`, or
    /// with `Unusable` if the first attempt failed.
    fn parse(&mut self, cur: &mut Cursor) -> Result<(), ParseError> {
        match self.state {
            State::Unparsed => {}
            State::Parsed(_) => return Err(ParseError::AlreadyParsed),
            State::Failed => return Err(ParseError::Unusable),
        }
        match parse_comparison(cur) {
            Ok(parsed) => {
                debug!(
                    "parsed string comparison {} {:?}",
                    Operator::from(parsed.cmp),
                    parsed.literal
                );
                self.state = State::Parsed(parsed);
                Ok(())
            }
            Err(e) => {
                debug!("string comparison failed to parse: {}", e);
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    fn apply(&self, subject: &T) -> bool {
        let parsed = match self.parsed() {
            Some(p) => p,
            None => {
                warn!("string comparison applied without a parsed literal");
                return false;
            }
        };
        let received = (self.extractor)(subject);
        compare(parsed.cmp, &received, &parsed.literal, self.ignore_case)
    }
}

impl<T, F> fmt::Debug for StringToken<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("StringToken");
        d.field("ignore_case", &self.ignore_case);
        if let State::Failed = self.state {
            d.field("failed", &true);
        }
        if let State::Parsed(p) = &self.state {
            d.field("comparison", &p.cmp).field("literal", &p.literal);
        }
        d.finish()
    }
}
