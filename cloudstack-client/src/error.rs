//! Error types for the client crate.

use std::time::Duration;

use cloudstack_core::{AsyncJobError, CoreError, JobId, JobStatus};

/// Errors that can occur while encoding, sending or decoding a command.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The server answered 404 and the command does not absorb it.
    #[error("{command}: not found: {message}")]
    NotFound { command: String, message: String },

    /// The server rejected the request with a 4xx status other than 404.
    #[error("{command}: rejected with HTTP {status}: {message}")]
    Client { command: String, status: u16, message: String },

    /// The credentials were refused or lack permission for the command.
    #[error("{command}: unauthorized (HTTP {status}): {message}")]
    Unauthorized { command: String, status: u16, message: String },

    /// The server failed while handling the request.
    #[error("{command}: server error HTTP {status}: {message}")]
    Server { command: String, status: u16, message: String },

    /// An asynchronous job finished with a failure payload.
    #[error("job {job_id} failed: {error}")]
    JobFailed { job_id: JobId, error: AsyncJobError },

    /// An asynchronous job was still running when the poll deadline passed.
    #[error("job {job_id} did not complete within {waited:?} (last status {last_status:?}, {progress}%)")]
    JobTimeout { job_id: JobId, waited: Duration, last_status: JobStatus, progress: u8 },

    /// A parameter declared as required by the command schema was not set.
    #[error("{command}: missing required parameter '{parameter}'")]
    MissingParameter { command: String, parameter: String },

    /// The response body was not the JSON the command declares.
    #[error("{command}: unexpected response: {reason}")]
    Parse { command: String, reason: String },

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A domain payload failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// Maps a non-success HTTP status to the matching error variant.
    ///
    /// CloudStack reports permission problems as 432 or 531 in addition to
    /// the standard 401 and 403.
    #[must_use]
    pub fn from_status(command: &str, status: u16, message: String) -> Self {
        let command = command.to_owned();
        match status {
            404 => Self::NotFound { command, message },
            401 | 403 | 432 | 531 => Self::Unauthorized { command, status, message },
            400..=499 => Self::Client { command, status, message },
            _ => Self::Server { command, status, message },
        }
    }

    /// Whether this is a 404 from the server.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The HTTP status behind this error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Client { status, .. } | Self::Unauthorized { status, .. } | Self::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
