//! The asynchronous job model.
//!
//! Mutating commands return a job id immediately; the job itself is polled
//! through `queryAsyncJobResult` until it reaches a terminal state.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::id::JobId;
use crate::wire::{self, code_enum};

code_enum! {
    /// Lifecycle status of a job.
    pub enum JobStatus {
        /// The job is still running.
        InProgress => 0,
        /// The job finished and produced a result.
        Succeeded => 1,
        /// The job finished with an error.
        Failed => 2,
    }
}

code_enum! {
    /// Outcome code reported alongside a finished job.
    pub enum ResultCode {
        Success => 0,
        Fail => 530,
    }
}

code_enum! {
    /// Error classes the server reports for failed jobs.
    pub enum ErrorCode {
        InternalError => 530,
        AccountError => 531,
        AccountResourceLimitError => 532,
        InsufficientCapacityError => 533,
        ResourceUnavailableError => 534,
        ResourceAllocationError => 535,
        ResourceInUseError => 536,
        NetworkRuleConflictError => 537,
    }
}

/// Failure payload of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AsyncJobError {
    #[serde(rename = "errorcode")]
    pub code: ErrorCode,
    #[serde(rename = "errortext", default)]
    pub text: Option<String>,
}

impl AsyncJobError {
    #[must_use]
    pub fn new(code: ErrorCode, text: impl Into<String>) -> Self {
        Self { code, text: Some(text.into()) }
    }
}

impl std::fmt::Display for AsyncJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} ({:?})", text, self.code),
            None => write!(f, "{:?}", self.code),
        }
    }
}

/// Receipt returned by create/deploy style commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AsyncCreateResponse {
    /// Id of the resource being created, when the server assigns one up front.
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(rename = "jobid")]
    pub job_id: JobId,
}

impl AsyncCreateResponse {
    #[must_use]
    pub fn new(id: Option<String>, job_id: JobId) -> Self {
        Self { id, job_id }
    }
}

/// A server-side job, with its result decoded as `T` once it succeeds.
///
/// Decoding through [`AsyncJob::from_value`] guarantees that a job whose
/// result code is [`ResultCode::Fail`] carries no result and always carries
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct AsyncJob<T> {
    pub id: JobId,
    pub account_id: Option<String>,
    pub user_id: Option<String>,
    /// Server-side command class that created the job.
    pub cmd: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub instance_id: Option<String>,
    pub instance_type: Option<String>,
    /// Percentage complete, 0 to 100.
    pub progress: u8,
    pub status: JobStatus,
    pub result_code: ResultCode,
    pub result_type: Option<String>,
    pub result: Option<T>,
    pub error: Option<AsyncJobError>,
}

#[derive(Deserialize)]
struct RawJob {
    #[serde(rename = "jobid", deserialize_with = "wire::id")]
    id: String,
    #[serde(rename = "accountid", default, deserialize_with = "wire::opt_id")]
    account_id: Option<String>,
    #[serde(rename = "userid", default, deserialize_with = "wire::opt_id")]
    user_id: Option<String>,
    #[serde(default)]
    cmd: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    created: Option<DateTime<Utc>>,
    #[serde(rename = "jobinstanceid", default, deserialize_with = "wire::opt_id")]
    instance_id: Option<String>,
    #[serde(rename = "jobinstancetype", default)]
    instance_type: Option<String>,
    #[serde(rename = "jobprocstatus", default)]
    progress: Option<i64>,
    #[serde(rename = "jobstatus", default)]
    status: Option<JobStatus>,
    #[serde(rename = "jobresultcode", default)]
    result_code: Option<ResultCode>,
    #[serde(rename = "jobresulttype", default)]
    result_type: Option<String>,
    #[serde(rename = "jobresult", default)]
    result: Value,
}

impl<T: DeserializeOwned> AsyncJob<T> {
    /// Decodes a `queryAsyncJobResult` payload.
    ///
    /// A successful `jobresult` of the form `{"virtualmachine": {...}}` is
    /// unwrapped before decoding; any other shape is decoded as a whole.
    /// A failed job is normalised to `ResultCode::Fail` with a populated
    /// error, synthesised from the status when the server sent none.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidJob`] if the job envelope is malformed and
    /// [`CoreError::ResultMismatch`] if a successful result does not decode
    /// as `T`.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let raw: RawJob = serde_json::from_value(value)
            .map_err(|e| CoreError::InvalidJob { reason: e.to_string() })?;

        let status = raw.status.unwrap_or(JobStatus::InProgress);
        let mut result_code = raw.result_code.unwrap_or(match status {
            JobStatus::Failed => ResultCode::Fail,
            _ => ResultCode::Success,
        });
        let failed = status == JobStatus::Failed || result_code == ResultCode::Fail;
        if failed {
            result_code = ResultCode::Fail;
        }

        let (result, error) = if failed {
            (None, Some(failure_payload(&raw.id, raw.result)))
        } else if status == JobStatus::Succeeded {
            (decode_result(&raw.id, raw.result)?, None)
        } else {
            (None, None)
        };

        let progress = raw.progress.map_or(0, |p| u8::try_from(p.clamp(0, 100)).unwrap_or(100));

        Ok(Self {
            id: JobId::new(raw.id),
            account_id: raw.account_id,
            user_id: raw.user_id,
            cmd: raw.cmd,
            created: raw.created,
            instance_id: raw.instance_id,
            instance_type: raw.instance_type,
            progress,
            status,
            result_code,
            result_type: raw.result_type,
            result,
            error,
        })
    }
}

impl<T> AsyncJob<T> {
    /// Whether the job has reached a terminal state.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.status, JobStatus::Succeeded | JobStatus::Failed)
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.result_code == ResultCode::Fail
    }

    #[must_use]
    pub fn has_succeeded(&self) -> bool {
        self.status == JobStatus::Succeeded && self.result_code == ResultCode::Success
    }
}

fn failure_payload(job_id: &str, result: Value) -> AsyncJobError {
    match serde_json::from_value::<AsyncJobError>(result) {
        Ok(error) => error,
        Err(_) => AsyncJobError::new(
            ErrorCode::Unrecognized,
            format!("job {job_id} failed without an error payload"),
        ),
    }
}

fn decode_result<T: DeserializeOwned>(job_id: &str, result: Value) -> Result<Option<T>, CoreError> {
    if result.is_null() {
        return Ok(None);
    }
    if let Some(inner) = single_wrapped(&result) {
        if let Ok(decoded) = serde_json::from_value(inner.clone()) {
            return Ok(Some(decoded));
        }
    }
    serde_json::from_value(result)
        .map(Some)
        .map_err(|e| CoreError::ResultMismatch { job_id: job_id.to_owned(), reason: e.to_string() })
}

/// Returns the inner value of `{"key": {...}}` or `{"key": [...]}`.
fn single_wrapped(value: &Value) -> Option<&Value> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.values().next().filter(|v| v.is_object() || v.is_array())
}
