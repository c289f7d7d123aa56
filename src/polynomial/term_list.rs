// src/polynomial/term_list.rs
//
// Term-list text format: a count `n` followed by `n` pairs of
// `coefficient exponent`, all whitespace separated.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;
use log::{debug, warn};
use crate::error::{PolyError, Result};
use crate::polynomial::polynomial::Polynomial;

/// Pulls polynomials and real numbers out of a whitespace-separated token
/// stream. Lines are read lazily, so several values can be taken from one
/// interactive input one after another.
pub struct TermListReader<R> {
    reader: R,
    pending: VecDeque<String>,
    position: usize,
}

impl<R: BufRead> TermListReader<R> {
    pub fn new(reader: R) -> Self {
        TermListReader {
            reader,
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        self.position += 1;
        Ok(self.pending.pop_front())
    }

    fn next_integer(&mut self, expected: &'static str) -> Result<Option<i64>> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => match token.parse::<i64>() {
                Ok(value) => Ok(Some(value)),
                Err(_) => {
                    warn!("Rejected token {} ({:?}), expected {}", self.position, token, expected);
                    Err(PolyError::InvalidToken {
                        token,
                        position: self.position,
                        expected,
                    })
                }
            },
        }
    }

    /// Reads one term list, adding each pair in the order given.
    pub fn read_polynomial(&mut self) -> Result<Polynomial> {
        let count = self.next_integer("term count")?.ok_or(PolyError::MissingCount)?;
        let expected = usize::try_from(count).map_err(|_| PolyError::NegativeCount { count })?;

        let mut polynomial = Polynomial::new();
        for found in 0..expected {
            let coefficient = self
                .next_integer("coefficient")?
                .ok_or(PolyError::Truncated { expected, found })?;
            let exponent = self
                .next_integer("exponent")?
                .ok_or(PolyError::Truncated { expected, found })?;
            polynomial.try_add_term(coefficient, self.checked_exponent(exponent)?)?;
        }

        debug!("Read {} pairs into {} terms", expected, polynomial.len());
        Ok(polynomial)
    }

    fn checked_exponent(&self, exponent: i64) -> Result<u32> {
        if exponent < 0 {
            warn!("Rejected negative exponent {} at token {}", exponent, self.position);
            return Err(PolyError::NegativeExponent {
                exponent,
                position: self.position,
            });
        }
        u32::try_from(exponent).map_err(|_| PolyError::ExponentOutOfRange {
            exponent,
            position: self.position,
        })
    }

    /// Reads one real number, e.g. an evaluation point.
    pub fn read_real(&mut self) -> Result<f64> {
        let token = self
            .next_token()?
            .ok_or(PolyError::UnexpectedEnd { expected: "a real number" })?;
        token.parse::<f64>().map_err(|_| PolyError::InvalidToken {
            token,
            position: self.position,
            expected: "real number",
        })
    }

    /// Fails if any token is left in the input.
    pub fn expect_end(&mut self) -> Result<()> {
        match self.next_token()? {
            None => Ok(()),
            Some(token) => Err(PolyError::TrailingInput {
                token,
                position: self.position,
            }),
        }
    }
}

impl Polynomial {
    /// Term-list rendering: the term count, then each `coefficient exponent`
    /// pair in stored order.
    pub fn to_term_list(&self) -> String {
        let mut output = self.len().to_string();
        for term in self {
            output.push_str(&format!(" {} {}", term.coefficient(), term.exponent()));
        }
        output
    }

    /// Parses exactly one term list, rejecting anything after it.
    pub fn from_term_list(input: &str) -> Result<Polynomial> {
        let mut reader = TermListReader::new(input.as_bytes());
        let polynomial = reader.read_polynomial()?;
        reader.expect_end()?;
        Ok(polynomial)
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(input: &str) -> Result<Polynomial> {
        Polynomial::from_term_list(input)
    }
}
