// src/polynomial/mod.rs

pub mod expression;
pub mod polynomial;
pub mod term_list;

#[cfg(test)]
mod proptests;

pub use polynomial::{Polynomial, Term};
pub use term_list::TermListReader;
