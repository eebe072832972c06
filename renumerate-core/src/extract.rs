//! Pulling numbers and text out of filename stems.
//!
//! All extractors take a stem; stripping the extension is the caller's job.

use crate::error::RenumerateError;
use crate::tokenizer::{runs, Run};
use serde::{Deserialize, Serialize};

/// A stem split into its first number and everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberTextSplit {
    /// Value of the first digit run, 0 when the stem has none
    pub number: u64,
    /// The stem with that first digit run removed
    pub text: String,
}

fn parse_number(digits: &str) -> Result<u64, RenumerateError> {
    digits
        .parse::<u64>()
        .map_err(|_| RenumerateError::NumberOverflow {
            digits: digits.to_string(),
        })
}

/// Split off the first number of `stem`.
///
/// `"photo_001"` gives `(1, "photo_")`, `"file 50 with spaces"` gives
/// `(50, "file  with spaces")`. Without any digits the number is 0 and the
/// text is the stem unchanged.
pub fn extract_number_and_text(stem: &str) -> Result<NumberTextSplit, RenumerateError> {
    let mut number = None;
    let mut text = String::with_capacity(stem.len());

    for run in runs(stem) {
        if number.is_none() && run.is_digit() {
            number = Some(parse_number(run.text)?);
        } else {
            text.push_str(run.text);
        }
    }

    Ok(NumberTextSplit {
        number: number.unwrap_or(0),
        text,
    })
}

/// The first digit run of `stem`, as written (leading zeros kept).
pub fn leading_number_digits(stem: &str) -> Option<&str> {
    runs(stem).find(Run::is_digit).map(|run| run.text)
}

/// Every non-digit character of `stem`, in order.
pub fn extract_text_only(stem: &str) -> String {
    runs(stem)
        .filter(|run| !run.is_digit())
        .map(|run| run.text)
        .collect()
}

/// Every digit of `stem`, in order, leading zeros kept. Empty when there are none.
pub fn extract_numbers_only(stem: &str) -> String {
    runs(stem)
        .filter(Run::is_digit)
        .map(|run| run.text)
        .collect()
}

/// Value of the digit run `stem` ends with, or 0 if it does not end in digits.
pub fn extract_number_at_end(stem: &str) -> Result<u64, RenumerateError> {
    match runs(stem).last() {
        Some(run) if run.is_digit() => parse_number(run.text),
        _ => Ok(0),
    }
}
