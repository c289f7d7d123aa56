// src/serialization/load.rs

use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use crate::error::Result;
use crate::polynomial::Polynomial;
use crate::serialization::polynomial_filename;

pub fn generic<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let load_json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&load_json)?)
}

/// Loads a polynomial saved as JSON. Terms are re-added one by one, so the
/// file does not need to be sorted or free of duplicates.
pub fn polynomial(path: &Path) -> Result<Polynomial> {
    generic(path)
}

/// Loads `Polynomial.01`, `Polynomial.02`, ... from `directory` until the
/// first missing number.
pub fn polynomials(directory: &Path) -> Result<Vec<Polynomial>> {
    let mut result = Vec::new();
    let mut counter = 1;
    loop {
        let path = directory.join(polynomial_filename(counter));
        if !path.exists() {
            break;
        }
        result.push(polynomial(&path)?);
        counter += 1;
    }
    Ok(result)
}
