// src/config/mod.rs

pub mod polycalc_config;

// Re-export main types for convenience
pub use polycalc_config::{OutputConfig, PolycalcConfig, SessionConfig};
