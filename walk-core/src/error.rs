use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WalkError {
    #[error("dimension must be at least 1")]
    ZeroDimension,

    #[error("{policy} walks are {expected}-dimensional, got dimension {found}")]
    DimensionMismatch {
        policy: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("pareto exponent must be finite and positive, got {0}")]
    InvalidExponent(f64),

    #[error("step probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("fit error: {0}")]
    Fit(String),

    #[error("distribution error: {0}")]
    Distribution(String),
}

pub type WalkResult<T> = Result<T, WalkError>;
