use thiserror::Error;

/// Failures of the distribution model. All of them are local to the call
/// that produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaussianError {
    #[error("no observations to estimate from")]
    EmptyInput,

    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = core::result::Result<T, GaussianError>;
