// src/polynomial/polynomial.rs

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use num::{One, Zero};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use crate::error::{PolyError, Result};

/// A single monomial `coefficient * x^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    coefficient: i64,
    exponent: u32,
}

impl Term {
    pub fn new(coefficient: i64, exponent: u32) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }

    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }
}

impl From<(i64, u32)> for Term {
    fn from((coefficient, exponent): (i64, u32)) -> Self {
        Term::new(coefficient, exponent)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.exponent == 0 {
            write!(f, "{}", self.coefficient)
        } else {
            write!(f, "{}x^{}", self.coefficient, self.exponent)
        }
    }
}

/// Sparse polynomial in one variable.
///
/// Terms are kept sorted by strictly decreasing exponent and never hold a zero
/// coefficient, so the empty term list is the zero polynomial. Every mutation
/// goes through [`Polynomial::add_term`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PolynomialRepr")]
pub struct Polynomial {
    terms: Vec<Term>,
}

// Deserialized terms may arrive unsorted or with duplicates.
#[derive(Deserialize)]
struct PolynomialRepr {
    terms: Vec<Term>,
}

impl TryFrom<PolynomialRepr> for Polynomial {
    type Error = PolyError;

    fn try_from(repr: PolynomialRepr) -> Result<Self> {
        let mut polynomial = Polynomial::new();
        for term in repr.terms {
            polynomial.try_add_term(term.coefficient, term.exponent)?;
        }
        Ok(polynomial)
    }
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn new() -> Self {
        Polynomial { terms: Vec::new() }
    }

    /// Creates the constant polynomial `c`.
    pub fn constant(c: i64) -> Self {
        let mut polynomial = Polynomial::new();
        polynomial.add_term(c, 0);
        polynomial
    }

    /// Creates the single-term polynomial `coefficient * x^exponent`.
    pub fn monomial(coefficient: i64, exponent: u32) -> Self {
        let mut polynomial = Polynomial::new();
        polynomial.add_term(coefficient, exponent);
        polynomial
    }

    /// Adds `coefficient * x^exponent`, merging with an existing term of the
    /// same exponent. A merge that sums to zero removes the term.
    ///
    /// # Panics
    ///
    /// Panics if the merged coefficient overflows `i64`; see
    /// [`Polynomial::try_add_term`].
    pub fn add_term(&mut self, coefficient: i64, exponent: u32) {
        if let Err(e) = self.try_add_term(coefficient, exponent) {
            panic!("{}", e);
        }
    }

    /// Like [`Polynomial::add_term`], but reports a coefficient overflow
    /// instead of panicking. The polynomial is unchanged on error.
    pub fn try_add_term(&mut self, coefficient: i64, exponent: u32) -> Result<()> {
        if coefficient == 0 {
            return Ok(());
        }

        // First term whose exponent is not greater than the new one.
        let position = self.terms.iter().position(|term| term.exponent <= exponent);

        match position {
            Some(index) if self.terms[index].exponent == exponent => {
                let merged = self.terms[index]
                    .coefficient
                    .checked_add(coefficient)
                    .ok_or(PolyError::CoefficientOverflow { exponent })?;
                if merged == 0 {
                    trace!("Term x^{} cancelled", exponent);
                    self.terms.remove(index);
                } else {
                    trace!("Merged {} into x^{} -> {}", coefficient, exponent, merged);
                    self.terms[index] = Term::new(merged, exponent);
                }
            }
            Some(index) => {
                trace!("Inserted {}x^{} at {}", coefficient, exponent, index);
                self.terms.insert(index, Term::new(coefficient, exponent));
            }
            None => {
                trace!("Appended {}x^{}", coefficient, exponent);
                self.terms.push(Term::new(coefficient, exponent));
            }
        }
        Ok(())
    }

    /// Removes every term.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Replaces the contents of `self` with the terms of `other`.
    pub fn assign_from(&mut self, other: &Polynomial) {
        self.clear();
        for term in &other.terms {
            self.add_term(term.coefficient, term.exponent);
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest exponent, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.first().map(Term::exponent)
    }

    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Coefficient of `x^exponent`, zero when no such term is stored.
    pub fn coefficient(&self, exponent: u32) -> i64 {
        self.terms
            .binary_search_by(|term| exponent.cmp(&term.exponent))
            .map_or(0, |index| self.terms[index].coefficient)
    }

    /// Evaluates the polynomial at `x`. `x^0` is 1 for every `x`, zero included.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().fold(0.0, |acc, term| {
            acc + term.coefficient as f64 * power(x, term.exponent)
        })
    }

    /// Sum of two polynomials, merging both descending term lists in one pass.
    ///
    /// # Panics
    ///
    /// Panics on coefficient overflow; see [`Polynomial::checked_add`].
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        self.checked_add(other).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn checked_add(&self, other: &Polynomial) -> Result<Polynomial> {
        let mut result = Polynomial::new();
        let mut left = self.terms.iter().copied().peekable();
        let mut right = other.terms.iter().copied().peekable();

        loop {
            match (left.peek().copied(), right.peek().copied()) {
                (None, None) => break,
                (Some(l), None) => {
                    result.try_add_term(l.coefficient, l.exponent)?;
                    left.next();
                }
                (None, Some(r)) => {
                    result.try_add_term(r.coefficient, r.exponent)?;
                    right.next();
                }
                (Some(l), Some(r)) => match l.exponent.cmp(&r.exponent) {
                    Ordering::Greater => {
                        result.try_add_term(l.coefficient, l.exponent)?;
                        left.next();
                    }
                    Ordering::Less => {
                        result.try_add_term(r.coefficient, r.exponent)?;
                        right.next();
                    }
                    Ordering::Equal => {
                        let sum = l
                            .coefficient
                            .checked_add(r.coefficient)
                            .ok_or(PolyError::CoefficientOverflow { exponent: l.exponent })?;
                        result.try_add_term(sum, l.exponent)?;
                        left.next();
                        right.next();
                    }
                },
            }
        }

        debug!("add: {} + {} terms -> {} terms", self.len(), other.len(), result.len());
        Ok(result)
    }

    /// Polynomial with every coefficient sign-flipped.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient is `i64::MIN`.
    pub fn negate(&self) -> Polynomial {
        self.checked_negate().unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn checked_negate(&self) -> Result<Polynomial> {
        let mut result = Polynomial::new();
        for term in &self.terms {
            let negated = term
                .coefficient
                .checked_neg()
                .ok_or(PolyError::CoefficientOverflow { exponent: term.exponent })?;
            result.try_add_term(negated, term.exponent)?;
        }
        Ok(result)
    }

    /// # Panics
    ///
    /// Panics on coefficient overflow; see [`Polynomial::checked_subtract`].
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        self.checked_subtract(other).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn checked_subtract(&self, other: &Polynomial) -> Result<Polynomial> {
        self.checked_add(&other.checked_negate()?)
    }

    /// Product by full distribution; like exponents are merged as they land.
    ///
    /// # Panics
    ///
    /// Panics on coefficient or exponent overflow; see
    /// [`Polynomial::checked_multiply`].
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        self.checked_multiply(other).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn checked_multiply(&self, other: &Polynomial) -> Result<Polynomial> {
        let mut result = Polynomial::new();
        for left in &self.terms {
            for right in &other.terms {
                let exponent = left.exponent.checked_add(right.exponent).ok_or(
                    PolyError::ExponentOverflow {
                        left: left.exponent,
                        right: right.exponent,
                    },
                )?;
                let coefficient = left
                    .coefficient
                    .checked_mul(right.coefficient)
                    .ok_or(PolyError::CoefficientOverflow { exponent })?;
                result.try_add_term(coefficient, exponent)?;
            }
        }

        debug!("multiply: {} x {} terms -> {} terms", self.len(), other.len(), result.len());
        Ok(result)
    }
}

fn power(x: f64, exponent: u32) -> f64 {
    match i32::try_from(exponent) {
        Ok(e) => x.powi(e),
        Err(_) => x.powf(f64::from(exponent)),
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(term.coefficient, term.exponent);
        }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut polynomial = Polynomial::new();
        polynomial.extend(iter);
        polynomial
    }
}

impl FromIterator<(i64, u32)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (i64, u32)>>(iter: I) -> Self {
        iter.into_iter().map(Term::from).collect()
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        Polynomial::add(&self, &other)
    }
}

impl<'a> std::ops::Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        self.subtract(&other)
    }
}

impl<'a> std::ops::Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'a Polynomial) -> Polynomial {
        self.subtract(other)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        self.multiply(&other)
    }
}

impl<'a> std::ops::Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'a Polynomial) -> Polynomial {
        self.multiply(other)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl<'a> std::ops::Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(1)
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if term.coefficient < 0 {
                f.write_str(" - ")?;
            } else if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}", term.coefficient.unsigned_abs())?;
            if term.exponent != 0 {
                write!(f, "x^{}", term.exponent)?;
            }
        }
        Ok(())
    }
}
