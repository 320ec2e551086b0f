//! Error types for the command-line runner.

use cloudstack_client::ClientError;

/// Errors that can occur while running a command from the command line.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CliError {
    /// An error propagated from the client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A connection setting was given neither as a flag nor in the environment.
    #[error("{0} is not set; pass the flag or its environment variable")]
    MissingSetting(&'static str),

    /// A positional parameter is not of the form `key=value`.
    #[error("invalid parameter '{0}', expected key=value")]
    InvalidParameter(String),

    /// `--wait` was given but the command answered without a job id.
    #[error("{0} did not return a job id to wait on")]
    NoJob(String),

    /// The payload could not be rendered as JSON.
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_display_unchanged() {
        let inner = ClientError::Transport("connection refused".to_owned());
        let expected = inner.to_string();
        let err = CliError::from(inner);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn missing_setting_names_the_flag() {
        let msg = CliError::MissingSetting("--endpoint").to_string();
        assert!(msg.contains("--endpoint"), "Display must name the flag");
    }
}
