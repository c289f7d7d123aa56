// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolyError {
    #[error("input ended before the term count")]
    MissingCount,
    #[error("input ended while expecting {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("token {position} ({token:?}) is not a valid {expected}")]
    InvalidToken {
        token: String,
        position: usize,
        expected: &'static str,
    },
    #[error("term count must not be negative, got {count}")]
    NegativeCount { count: i64 },
    #[error("token {position}: exponent must not be negative, got {exponent}")]
    NegativeExponent { exponent: i64, position: usize },
    #[error("token {position}: exponent {exponent} is out of range")]
    ExponentOutOfRange { exponent: i64, position: usize },
    #[error("expected {expected} terms, input ended after {found}")]
    Truncated { expected: usize, found: usize },
    #[error("unexpected token {position} ({token:?}) after the term list")]
    TrailingInput { token: String, position: usize },
    #[error("cannot parse polynomial term {fragment:?}")]
    InvalidExpression { fragment: String },
    #[error("coefficient of x^{exponent} overflows i64")]
    CoefficientOverflow { exponent: u32 },
    #[error("exponent x^{left} * x^{right} overflows u32")]
    ExponentOverflow { left: u32, right: u32 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PolyError>;
