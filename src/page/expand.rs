//! Date token expansion

use std::fmt::Write;

use chrono::NaiveDateTime;
use chrono::format::StrftimeItems;

use super::PageError;
use super::token::{Token, render, tokenize, validate_dates};

/// Expand every `{d:<format>}` token in `pattern` against `reference_date`.
///
/// Input and name tokens are left untouched.
pub fn expand(pattern: &str, reference_date: NaiveDateTime) -> Result<String, PageError> {
    let tokens = tokenize(pattern);
    validate_dates(pattern, &tokens)?;
    render(&tokens, |token| match token {
        Token::Date(spec) => format_date(pattern, spec, reference_date).map(Some),
        _ => Ok(None),
    })
}

/// Format one date specifier.
///
/// Specifiers that parse but cannot be rendered for a naive date (such as a
/// timezone offset) surface as a format error rather than a panic.
pub(crate) fn format_date(
    pattern: &str,
    spec: &str,
    reference_date: NaiveDateTime,
) -> Result<String, PageError> {
    let mut out = String::new();
    write!(
        out,
        "{}",
        reference_date.format_with_items(StrftimeItems::new(spec))
    )
    .map_err(|_| PageError::TokenFormat {
        pattern: pattern.to_string(),
        reason: format!("date format \"{}\" cannot be applied", spec),
    })?;
    Ok(out)
}
