//! Token evaluation, accumulation, and formatting.
//!
//! [`evaluate`] turns one token into a minute count; [`sum_and_format`]
//! folds an ordered token sequence into a total and renders it. The fold is
//! fail-fast: the first invalid token aborts the run and later tokens are
//! never looked at.

use crate::convert;
use crate::error::{EvalError, Result};
use crate::grammar::{Grammar, Shape};
use crate::MinuteCount;

/// Evaluate a single token into a minute count.
///
/// Classifies the token against the grammars, then dispatches to the
/// converter for its shape. Unrecognized tokens and out-of-range clock
/// fields surface as [`EvalError`] values carrying the offending text.
pub fn evaluate(grammar: &Grammar, token: &str) -> Result<MinuteCount> {
    match grammar.classify(token) {
        Shape::Range => convert::range_minutes(grammar, token),
        Shape::Absolute => convert::absolute_minutes(grammar, token),
        Shape::Decimal => convert::decimal_minutes(token),
        Shape::Unrecognized => Err(EvalError::UnrecognizedFormat {
            token: token.to_string(),
        }),
    }
}

/// Sum every token in input order and render the total as `HH:MM`.
///
/// The running total starts at zero, so an empty sequence yields `00:00`.
/// On the first failing token the whole operation fails with that token's
/// error; remaining tokens are not pulled from the iterator.
pub fn sum_and_format<I, S>(grammar: &Grammar, tokens: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total: MinuteCount = 0;
    for token in tokens {
        total = total.saturating_add(evaluate(grammar, token.as_ref())?);
    }
    Ok(format_minutes(total))
}

/// Render a minute count as `HH:MM`.
///
/// Both fields are zero-padded to at least two digits. Hours are not
/// capped: totals past 99 hours keep their full width rather than wrapping.
pub fn format_minutes(total: MinuteCount) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}
