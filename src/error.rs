use std::fmt;

/// Message shown for every failure that is not a classified not-found.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Failure of a short URL lookup.
///
/// Only two kinds are distinguished: the server answered 404 for the short
/// URL, or anything else went wrong. `Display` yields the exact message the
/// view shows for each kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    NotFound { short_url: String },
    Other { reason: String },
}

impl ExpandError {
    pub fn other(reason: impl fmt::Display) -> Self {
        ExpandError::Other {
            reason: reason.to_string(),
        }
    }

    /// Underlying cause, for logs. The not-found case has no further detail.
    pub fn reason(&self) -> &str {
        match self {
            ExpandError::NotFound { .. } => "not found",
            ExpandError::Other { reason } => reason,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExpandError::NotFound { .. })
    }
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::NotFound { short_url } => write!(f, "{} URL not found", short_url),
            ExpandError::Other { .. } => f.write_str(GENERIC_ERROR_MESSAGE),
        }
    }
}

impl std::error::Error for ExpandError {}

impl From<reqwest::Error> for ExpandError {
    fn from(err: reqwest::Error) -> Self {
        ExpandError::other(err)
    }
}

/// Failure of a create-short-URL call.
#[derive(Debug)]
pub enum ShortenError {
    EmptyUrl,
    Status(u16),
    Http(reqwest::Error),
    Malformed(String),
}

impl fmt::Display for ShortenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortenError::EmptyUrl => f.write_str("full URL must not be empty"),
            ShortenError::Status(code) => write!(f, "server answered with status {}", code),
            ShortenError::Http(err) => write!(f, "request failed: {}", err),
            ShortenError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ShortenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShortenError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ShortenError {
    fn from(err: reqwest::Error) -> Self {
        ShortenError::Http(err)
    }
}
