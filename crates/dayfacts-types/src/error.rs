use std::fmt;

/// Result type for dayfacts-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date input was empty, malformed, or not a real calendar date
    InvalidDate(String),

    /// Date lies after today (the picker is bounded to the current day)
    FutureDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            Error::FutureDate(date) => write!(f, "Date {} is in the future", date),
        }
    }
}

impl std::error::Error for Error {}
