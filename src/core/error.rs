use thiserror::Error;

/// Errors raised by the numerology engine
///
/// Every failure is caused by caller-supplied data; the engine itself has no
/// fallible I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl NumerologyError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Prefix the message with the request field it came from
    pub fn for_field(self, field: &str) -> Self {
        match self {
            Self::InvalidInput(message) => Self::InvalidInput(format!("{}: {}", field, message)),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
