use thiserror::Error;

use crate::scatter::MAX_PRECISION;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while configuring or running the generators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("grid size {0} is too large to be stored")]
    GridTooLarge(usize),
    #[error("`{name}` must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("bounding rectangle [{minx}, {maxx}] x [{miny}, {maxy}] has no area")]
    DegenerateBounds {
        minx: f64,
        maxx: f64,
        miny: f64,
        maxy: f64,
    },
    #[error("precision of {0} decimals is above the maximum of {max}", max = MAX_PRECISION)]
    Precision(u32),
    #[error("attempt budget must be at least 1")]
    NoAttempts,
    #[error("placed only {placed} of {requested} points in {attempts} attempts")]
    PackingExhausted {
        placed: usize,
        requested: usize,
        attempts: u64,
    },
}

impl Error {
    /// Is this error caused by an invalid configuration?
    ///
    /// Configuration errors are raised before any random draw.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        !matches!(self, Error::PackingExhausted { .. })
    }
}

/// Check that a parameter is a strictly positive, finite number
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(Error::NotPositive { name, value })
    }
}
