// src/math/error.rs
use std::fmt;
use thiserror::Error;

/// Eingabefeld der Kreisregion, für Fehlermeldungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionField {
    A,
    B,
    Radius,
}

impl fmt::Display for RegionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionField::A => write!(f, "a (X)"),
            RegionField::B => write!(f, "b (Y)"),
            RegionField::Radius => write!(f, "r (Scale)"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: RegionField, input: String },

    #[error("Value for {field} is not finite: {value}")]
    NonFiniteValue { field: RegionField, value: f64 },

    #[error("Radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },

    #[error("Sampling square collapses at origin ({a}, {b}) with side {r}")]
    DegenerateSquare { a: f64, b: f64, r: f64 },

    #[error("Region ({a}, {b}) with radius {r} exceeds the floating point range")]
    RegionOutOfRange { a: f64, b: f64, r: f64 },
}

pub type MathResult<T> = Result<T, MathError>;
