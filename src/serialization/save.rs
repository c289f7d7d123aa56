// src/serialization/save.rs

use std::fs;
use std::path::Path;
use log::debug;
use serde::Serialize;
use crate::error::Result;
use crate::polynomial::Polynomial;
use crate::serialization::polynomial_filename;

pub fn object<T: Serialize>(obj: &T, path: &Path) -> Result<()> {
    let save_json = serde_json::to_string_pretty(obj)?;
    fs::write(path, save_json)?;
    debug!("Saved {}", path.display());
    Ok(())
}

pub fn polynomial(polynomial: &Polynomial, path: &Path) -> Result<()> {
    object(polynomial, path)
}

/// Saves each polynomial as `Polynomial.NN` in `directory`, numbering from 01.
pub fn polynomials(polynomials: &[Polynomial], directory: &Path) -> Result<()> {
    fs::create_dir_all(directory)?;
    for (i, poly) in polynomials.iter().enumerate() {
        polynomial(poly, &directory.join(polynomial_filename(i + 1)))?;
    }
    Ok(())
}
