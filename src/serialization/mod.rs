// src/serialization/mod.rs

pub mod load;
pub mod save;

// Files written by `save::polynomials` are named Polynomial.01, Polynomial.02, ...
pub(crate) fn polynomial_filename(index: usize) -> String {
    format!("Polynomial.{:02}", index)
}
