//! A single logical resolution shared by path and body

use chrono::NaiveDateTime;

use super::PageError;
use super::bind::check_arity;
use super::expand::format_date;
use super::token::{Token, render, required_inputs, tokenize, validate_dates};

/// Values that every token of one page resolves against.
///
/// A page's path and body are both resolved through the same `Resolution`,
/// so a `{d:%W}` in the directory and in the template yield the same week.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    reference_date: NaiveDateTime,
    inputs: &'a [String],
    name: Option<&'a str>,
    example: Option<&'a str>,
}

impl<'a> Resolution<'a> {
    pub fn new(reference_date: NaiveDateTime, inputs: &'a [String]) -> Self {
        Self {
            reference_date,
            inputs,
            name: None,
            example: None,
        }
    }

    /// Substitute `{name}` tokens with the given scope name
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Example command attached to arity errors
    pub fn with_example(mut self, example: Option<&'a str>) -> Self {
        self.example = example;
        self
    }

    /// Check every pattern's date tokens, then that the inputs cover them all.
    ///
    /// Date errors win over arity errors. The expected count reported is the
    /// highest index across all patterns, not just the first pattern that
    /// falls short.
    pub fn validate(&self, patterns: &[&str]) -> Result<(), PageError> {
        let mut expected = 0;
        for pattern in patterns {
            let tokens = tokenize(pattern);
            validate_dates(pattern, &tokens)?;
            expected = expected.max(required_inputs(&tokens));
        }
        check_arity(expected, self.inputs.len()).map_err(|e| e.with_example(self.example))
    }

    /// Expand date tokens, bind inputs and fill in the scope name.
    pub fn apply(&self, pattern: &str) -> Result<String, PageError> {
        let tokens = tokenize(pattern);
        validate_dates(pattern, &tokens)?;
        check_arity(required_inputs(&tokens), self.inputs.len())
            .map_err(|e| e.with_example(self.example))?;

        render(&tokens, |token| match token {
            Token::Date(spec) => format_date(pattern, spec, self.reference_date).map(Some),
            Token::Input(index) => Ok(Some(self.inputs[*index].clone())),
            Token::Name => Ok(self.name.map(String::from)),
            Token::Literal(_) => Ok(None),
        })
    }
}
