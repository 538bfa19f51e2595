use std::fmt;

/// Result type for dayfacts-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer.
///
/// One variant per distinct failure reason the view layer tells apart;
/// a single invocation makes a single attempt, never an automatic retry.
#[derive(Debug)]
pub enum Error {
    /// The request did not complete within the configured timeout
    Timeout,

    /// The endpoint answered with a non-success status code
    Http(u16),

    /// Connection-level failure (DNS, TLS, refused, reset)
    Network(String),

    /// The response body was not the JSON shape we expected
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timeout => write!(f, "Request timed out"),
            Error::Http(status) => write!(f, "HTTP error: status {}", status),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_decode() {
            Error::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Http(status.as_u16())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_reason() {
        assert_eq!(Error::Timeout.to_string(), "Request timed out");
        assert_eq!(Error::Http(503).to_string(), "HTTP error: status 503");
        assert!(Error::Parse("bad".into()).to_string().contains("Parse"));
    }

    #[test]
    fn json_errors_classify_as_parse() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(Error::from(err), Error::Parse(_)));
    }
}
