/// Error types for user fetch operations
use thiserror::Error;

/// Errors that can occur while fetching a user record
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status.
    ///
    /// The message is the same for every status code; inspect `status`
    /// to tell a 404 from a server error.
    #[error("User not found")]
    HttpStatus {
        /// HTTP status code returned by the endpoint
        status: u16,
    },

    /// Response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request did not complete (connection, DNS, body read, client setup)
    #[error("Request failed: {0}")]
    Transport(String),
}

impl FetchError {
    /// Status code carried by an HTTP status failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
