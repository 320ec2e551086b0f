//! Async job polling.
//!
//! A job is queried through `queryAsyncJobResult` until it reaches a terminal
//! state or the deadline passes. The delay between queries starts at
//! [`PollConfig::initial_interval`] and grows by the backoff factor up to
//! [`PollConfig::max_interval`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time::{sleep, Instant};

use cloudstack_core::{AsyncJob, JobId, JobStatus};

use crate::catalog::QUERY_ASYNC_JOB_RESULT;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::config::PollConfig;
use crate::transport::Transport;
use crate::ClientError;

/// Polls async jobs through a borrowed client.
///
/// # Cancel Safety
/// Cancel safe. Dropping a wait future stops polling; the server-side job
/// keeps running.
#[derive(Debug)]
pub struct JobPoller<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
    config: PollConfig,
}

impl<'a, T: Transport> JobPoller<'a, T> {
    #[must_use]
    pub fn new(client: &'a CloudStackClient<T>, config: PollConfig) -> Self {
        Self { client, config }
    }

    /// Replaces the polling schedule for this poller.
    #[must_use]
    pub fn with_config(mut self, config: PollConfig) -> Self {
        self.config = config;
        self
    }

    /// Queries a job once.
    ///
    /// Returns `None` if the server does not know the job.
    ///
    /// # Errors
    /// Returns [`ClientError::Core`] if the job payload is malformed or a
    /// successful result does not decode as `R`.
    pub async fn query<R: DeserializeOwned>(&self, job_id: &JobId) -> Result<Option<AsyncJob<R>>, ClientError> {
        let params = QueryParams::new().with("jobid", job_id);
        let payload = self.client.execute(&QUERY_ASYNC_JOB_RESULT, params).await?;
        if payload.is_null() {
            return Ok(None);
        }
        Ok(Some(AsyncJob::from_value(payload)?))
    }

    /// Waits for a job to succeed, using the configured timeout.
    ///
    /// # Errors
    /// Returns [`ClientError::JobFailed`] if the job fails,
    /// [`ClientError::JobTimeout`] if it is still running when the timeout
    /// passes and [`ClientError::NotFound`] if the server does not know it.
    pub async fn wait<R: DeserializeOwned>(&self, job_id: &JobId) -> Result<AsyncJob<R>, ClientError> {
        self.wait_until(job_id, self.config.deadline_from(Instant::now())).await
    }

    /// Waits for a job to succeed or `deadline` to pass.
    ///
    /// The job is always queried at least once. When the deadline passes the
    /// last observed state is reported inside the timeout error, never
    /// returned as if it were a result.
    ///
    /// # Errors
    /// See [`JobPoller::wait`].
    pub async fn wait_until<R: DeserializeOwned>(
        &self,
        job_id: &JobId,
        deadline: Instant,
    ) -> Result<AsyncJob<R>, ClientError> {
        let started = Instant::now();
        let mut interval = self.config.initial_interval.max(PollConfig::MIN_INTERVAL);
        let mut polls = 0u32;

        loop {
            polls += 1;
            let job: AsyncJob<R> = self.query(job_id).await?.ok_or_else(|| ClientError::NotFound {
                command: QUERY_ASYNC_JOB_RESULT.name.to_owned(),
                message: format!("job {job_id} is unknown to the server"),
            })?;

            if job.has_failed() {
                let error = job.error.unwrap_or_else(|| {
                    cloudstack_core::AsyncJobError::new(
                        cloudstack_core::ErrorCode::Unrecognized,
                        "job failed without an error payload",
                    )
                });
                tracing::warn!(job_id = %job_id, polls, error = %error, "async job failed");
                return Err(ClientError::JobFailed { job_id: job_id.clone(), error });
            }
            if job.status == JobStatus::Succeeded {
                tracing::info!(
                    job_id = %job_id,
                    polls,
                    elapsed_ms = started.elapsed().as_millis(),
                    "async job succeeded"
                );
                return Ok(job);
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::warn!(job_id = %job_id, polls, progress = job.progress, "async job timed out");
                return Err(ClientError::JobTimeout {
                    job_id: job_id.clone(),
                    waited: now.duration_since(started),
                    last_status: job.status,
                    progress: job.progress,
                });
            }

            tracing::debug!(job_id = %job_id, progress = job.progress, next_poll_ms = interval.as_millis(), "job in progress");
            sleep(interval.min(deadline - now)).await;
            interval = self.config.next_interval(interval);
        }
    }

    /// Waits for a job and returns its decoded result.
    ///
    /// # Errors
    /// Returns [`ClientError::Parse`] if the job succeeded without a result,
    /// in addition to the errors of [`JobPoller::wait`].
    pub async fn wait_for_result<R: DeserializeOwned>(&self, job_id: &JobId) -> Result<R, ClientError> {
        self.wait::<R>(job_id).await?.result.ok_or_else(|| ClientError::Parse {
            command: QUERY_ASYNC_JOB_RESULT.name.to_owned(),
            reason: format!("job {job_id} succeeded without a result"),
        })
    }

    /// The timeout this poller applies in [`JobPoller::wait`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }
}
