//! Error types for archive arguments and fetches.

use reqwest::StatusCode;
use thiserror::Error;

/// A player, year or month argument that does not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("player name must not be empty")]
    EmptyPlayer,

    #[error("invalid player name '{0}': only letters, digits, '_' and '-' are allowed")]
    InvalidPlayer(String),

    #[error("invalid year '{0}': expected four digits, e.g. 2024")]
    InvalidYear(String),

    #[error("invalid month '{0}': expected two digits from 01 to 12")]
    InvalidMonth(String),
}

/// Why fetching an archive failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Host name of the archive URL could not be resolved
    #[error("could not resolve host for {url}: {detail}")]
    Dns { url: String, detail: String },

    #[error("connection refused by {url}")]
    ConnectionRefused { url: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Any connection failure that is not DNS or a refusal
    #[error("failed to connect to {url}: {detail}")]
    Connect { url: String, detail: String },

    /// The server answered with a non-2xx status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The body stream broke after the status line arrived
    #[error("failed to read response body: {detail}")]
    Body { detail: String },

    #[error("request to {url} failed: {detail}")]
    Request { url: String, detail: String },
}

impl FetchError {
    /// Process exit code for this failure, using sysexits values.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Dns { .. } => exitcode::NOHOST,
            Self::ConnectionRefused { .. } | Self::Connect { .. } => exitcode::UNAVAILABLE,
            Self::Timeout { .. } => exitcode::TEMPFAIL,
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND => exitcode::NOINPUT,
            Self::Status { .. } => exitcode::UNAVAILABLE,
            Self::Body { .. } => exitcode::IOERR,
            Self::Request { .. } => exitcode::SOFTWARE,
        }
    }

    /// A short suggestion shown under the error message, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Dns { .. } | Self::Connect { .. } => {
                Some("Check your network connection and try again.")
            }
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                Some("Check the player name, and that the player has games in that month.")
            }
            Self::Status { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS => {
                Some("The API is rate limiting requests. Wait a moment before retrying.")
            }
            _ => None,
        }
    }
}
