use crate::error::ParseError;
use crate::lexer::Operator;

/// The operators a string comparison can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    ApproximatelyEqual,
    NotEqual,
}

impl TryFrom<Operator> for Comparison {
    type Error = ParseError;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        match op {
            Operator::Equal => Ok(Comparison::Equal),
            Operator::ApproximatelyEqual => Ok(Comparison::ApproximatelyEqual),
            Operator::NotEqual => Ok(Comparison::NotEqual),
            _ => Err(ParseError::UnsupportedOperator(op)),
        }
    }
}

impl From<Comparison> for Operator {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Equal => Operator::Equal,
            Comparison::ApproximatelyEqual => Operator::ApproximatelyEqual,
            Comparison::NotEqual => Operator::NotEqual,
        }
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

// single-char case mappings; multi-char expansions such as `ß` -> `SS`
// keep the char unchanged, `İ` lowercases to plain `i`
fn upper(ch: char) -> char {
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

fn lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (ua, ub) = (upper(a), upper(b));
    ua == ub || lower(ua) == lower(ub)
}

/// Case-insensitive equality folding one char at a time, so the result
/// never depends on the surrounding characters.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

fn equal(received: &str, literal: &str, ignore_case: bool) -> bool {
    if ignore_case {
        eq_ignore_case(received, literal)
    } else {
        received == literal
    }
}

/// Wildcard match. `*` is special only as the first and/or last character
/// of `pattern`; matching is always case-insensitive.
fn approximately(received: &str, pattern: &str) -> bool {
    let lead = pattern.starts_with('*');
    let trail = pattern.ends_with('*');
    if lead && trail {
        if pattern.len() == 1 {
            return true;
        }
        return fold(received).contains(&fold(&pattern[1..pattern.len() - 1]));
    }
    if lead {
        return fold(received).ends_with(&fold(&pattern[1..]));
    }
    if trail {
        return fold(received).starts_with(&fold(&pattern[..pattern.len() - 1]));
    }
    equal(received, pattern, true)
}

/// Evaluates `received` against the parsed `literal`. `ignore_case` only
/// affects `Equal` and `NotEqual`.
pub fn compare(cmp: Comparison, received: &str, literal: &str, ignore_case: bool) -> bool {
    match cmp {
        Comparison::Equal => equal(received, literal, ignore_case),
        Comparison::NotEqual => !equal(received, literal, ignore_case),
        Comparison::ApproximatelyEqual => approximately(received, literal),
    }
}
