use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the arithmetic and text libraries.
///
/// Every variant is fatal to the single call that produced it. Nothing in the
/// libraries retries, logs or recovers on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operand lies outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
