use std::fmt;
use thiserror::Error;

/// The condition a quantifier argument failed to satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    GreaterThanZero,
    NonNegative,
    NotLessThanMin,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::GreaterThanZero => f.write_str("must be greater than zero"),
            Constraint::NonNegative => f.write_str("must be non-negative"),
            Constraint::NotLessThanMin => f.write_str("cannot be less than min"),
        }
    }
}

/// Errors raised while building a pattern.
///
/// Only the [`Quantifier`](crate::Quantifier) factories can fail; every other
/// builder operation is total.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{parameter} {constraint}")]
    InvalidArgument {
        parameter: &'static str,
        constraint: Constraint,
    },
}

impl Error {
    pub(crate) fn invalid_argument(parameter: &'static str, constraint: Constraint) -> Self {
        log::debug!("rejected quantifier argument `{}`: {}", parameter, constraint);
        Error::InvalidArgument {
            parameter,
            constraint,
        }
    }

    /// Name of the argument that was rejected.
    pub fn parameter(&self) -> &'static str {
        match self {
            Error::InvalidArgument { parameter, .. } => *parameter,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
