// src/polynomial/expression.rs

use log::{debug, error};
use crate::error::{PolyError, Result};
use crate::polynomial::polynomial::Polynomial;

impl Polynomial {
    /// Parses a sum-of-terms expression such as `3x^2 - 1x^1 + 4`, the form
    /// produced by `Display`.
    ///
    /// Spaces are ignored, `X` is accepted for `x`, a bare `x` means `x^1`
    /// and a missing coefficient means 1. The empty string is the zero
    /// polynomial.
    pub fn parse_expression(input: &str) -> Result<Polynomial> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '−' { '-' } else { c })
            .collect();

        let mut polynomial = Polynomial::new();
        for fragment in split_signed_terms(&compact) {
            let (coefficient, exponent) = parse_term(fragment).map_err(|e| {
                error!("Invalid term {:?} in {:?}", fragment, input);
                e
            })?;
            polynomial.try_add_term(coefficient, exponent)?;
        }

        debug!("Parsed {:?} into {} terms", input, polynomial.len());
        Ok(polynomial)
    }
}

// Splits before every sign that is not the first character of the input and
// does not directly follow `^`.
fn split_signed_terms(input: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut previous = None;
    for (i, c) in input.char_indices() {
        if (c == '+' || c == '-') && i > start && previous != Some('^') {
            fragments.push(&input[start..i]);
            start = i;
        }
        previous = Some(c);
    }
    if start < input.len() {
        fragments.push(&input[start..]);
    }
    fragments
}

fn parse_term(fragment: &str) -> Result<(i64, u32)> {
    let invalid = || PolyError::InvalidExpression {
        fragment: fragment.to_string(),
    };

    let (negative, body) = match fragment.as_bytes().first() {
        Some(b'-') => (true, &fragment[1..]),
        Some(b'+') => (false, &fragment[1..]),
        _ => (false, fragment),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let (magnitude, exponent) = match body.find(|c: char| c == 'x' || c == 'X') {
        Some(split) => {
            let digits = &body[..split];
            let power = &body[split + 1..];
            let magnitude = if digits.is_empty() {
                1
            } else {
                parse_magnitude(digits).ok_or_else(invalid)?
            };
            let exponent = if power.is_empty() {
                1
            } else {
                power
                    .strip_prefix('^')
                    .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|p| p.parse::<u32>().ok())
                    .ok_or_else(invalid)?
            };
            (magnitude, exponent)
        }
        None => (parse_magnitude(body).ok_or_else(invalid)?, 0),
    };

    let signed = if negative { -magnitude } else { magnitude };
    let coefficient = i64::try_from(signed).map_err(|_| invalid())?;
    Ok((coefficient, exponent))
}

// Parsed wide so that `i64::MIN` survives the separate sign.
fn parse_magnitude(digits: &str) -> Option<i128> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i128>().ok()
}
