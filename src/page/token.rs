//! Pattern tokenizer
//!
//! Patterns are plain text interspersed with placeholders:
//! - `{d:<format>}` - the reference date formatted with a strftime specifier
//! - `{inputN}`     - the N-th (zero-indexed) positional user input
//! - `{name}`       - the scope name
//!
//! Anything else, including stray braces, is literal text.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::PageError;

const DATE_OPEN: &str = "{d:";
const NAME_TOKEN: &str = "{name}";

// Groups: 1=date format, 2=input index
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?:d:([^}]*)|input(\d+)|name)\}").unwrap());

/// A parsed piece of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied verbatim
    Literal(&'a str),
    /// `{d:<format>}`, holding the format specifier
    Date(&'a str),
    /// `{inputN}`, holding N
    Input(usize),
    /// `{name}`
    Name,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => f.write_str(text),
            Token::Date(spec) => write!(f, "{{d:{}}}", spec),
            Token::Input(index) => write!(f, "{{input{}}}", index),
            Token::Name => f.write_str(NAME_TOKEN),
        }
    }
}

/// Split a pattern into tokens, left to right.
///
/// Text between placeholder matches becomes literal tokens. Tokenizing never
/// fails: an unterminated `{d:` stays literal text and is reported by
/// [`validate_dates`] when date tokens are expanded.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;

    for captures in PLACEHOLDER.captures_iter(pattern) {
        let (Some(whole), Some(token)) = (captures.get(0), placeholder(&captures)) else {
            continue;
        };
        if literal_start < whole.start() {
            tokens.push(Token::Literal(&pattern[literal_start..whole.start()]));
        }
        tokens.push(token);
        literal_start = whole.end();
    }

    if literal_start < pattern.len() {
        tokens.push(Token::Literal(&pattern[literal_start..]));
    }
    tokens
}

/// Turn one placeholder match into a token.
///
/// An input index too large to count past stays literal text.
fn placeholder<'a>(captures: &Captures<'a>) -> Option<Token<'a>> {
    if let Some(spec) = captures.get(1) {
        return Some(Token::Date(spec.as_str()));
    }
    if let Some(digits) = captures.get(2) {
        return digits
            .as_str()
            .parse()
            .ok()
            .filter(|index: &usize| *index < usize::MAX)
            .map(Token::Input);
    }
    Some(Token::Name)
}

/// Number of positional inputs the tokens need (highest index + 1)
pub fn required_inputs(tokens: &[Token<'_>]) -> usize {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Input(index) => Some(index + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Reject unterminated date tokens and unknown format specifiers.
pub fn validate_dates(pattern: &str, tokens: &[Token<'_>]) -> Result<(), PageError> {
    for token in tokens {
        match token {
            Token::Literal(text) if text.contains(DATE_OPEN) => {
                return Err(PageError::TokenFormat {
                    pattern: pattern.to_string(),
                    reason: "unterminated date token".to_string(),
                });
            }
            Token::Date(spec) => {
                if StrftimeItems::new(spec).any(|item| matches!(item, Item::Error)) {
                    return Err(PageError::TokenFormat {
                        pattern: pattern.to_string(),
                        reason: format!("unknown date format \"{}\"", spec),
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Join tokens back into a string.
///
/// `substitute` returns the replacement for a placeholder, or `None` to keep
/// the placeholder text verbatim.
pub fn render<F>(tokens: &[Token<'_>], mut substitute: F) -> Result<String, PageError>
where
    F: FnMut(&Token<'_>) -> Result<Option<String>, PageError>,
{
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            placeholder => match substitute(placeholder)? {
                Some(value) => out.push_str(&value),
                None => out.push_str(&placeholder.to_string()),
            },
        }
    }
    Ok(out)
}
