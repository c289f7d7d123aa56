// src/lib.rs

pub mod config;
pub mod console;
pub mod error;
pub mod polynomial;
pub mod serialization;

pub use error::{PolyError, Result};
pub use polynomial::{Polynomial, Term, TermListReader};
