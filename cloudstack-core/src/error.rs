/// Errors produced by the `cloudstack-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A job payload could not be decoded into an [`AsyncJob`](crate::AsyncJob).
    #[error("invalid async job payload: {reason}")]
    InvalidJob { reason: String },

    /// A job result could not be decoded into the requested result type.
    #[error("job {job_id} result does not match the expected type: {reason}")]
    ResultMismatch { job_id: String, reason: String },

    /// A wire value was outside the range the field accepts.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
