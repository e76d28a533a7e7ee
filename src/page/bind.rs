//! Positional input binding

use super::PageError;
use super::token::{Token, render, required_inputs, tokenize};

/// Replace every `{inputN}` token in `pattern` with `inputs[N]`.
///
/// Fails with [`PageError::InputArity`] when the pattern references more
/// inputs than were given. Extra inputs are ignored.
pub fn bind<S: AsRef<str>>(pattern: &str, inputs: &[S]) -> Result<String, PageError> {
    let tokens = tokenize(pattern);
    check_arity(required_inputs(&tokens), inputs.len())?;
    render(&tokens, |token| match token {
        Token::Input(index) => Ok(Some(inputs[*index].as_ref().to_string())),
        _ => Ok(None),
    })
}

pub(crate) fn check_arity(expected: usize, actual: usize) -> Result<(), PageError> {
    if expected > actual {
        return Err(PageError::InputArity {
            expected,
            actual,
            example: None,
        });
    }
    Ok(())
}
