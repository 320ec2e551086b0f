use serde::de::DeserializeOwned;
use serde_json::Value;

use cloudstack_core::{AsyncJob, JobId};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::poller::JobPoller;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListAsyncJobsOptions {
        account => "account",
        domain_id => "domainid",
        keyword => "keyword",
        /// Only jobs started at or after this `yyyy-MM-dd'T'HH:mm:ssZ` date.
        start_date => "startdate",
        page => "page",
        page_size => "pagesize",
    }
}

/// Read access to async jobs without waiting on them.
#[derive(Debug)]
pub struct AsyncJobApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> AsyncJobApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// Lists recent jobs. Results stay as raw JSON since each job carries a
    /// different result type.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty
    /// list, and [`ClientError::Core`] for a malformed job.
    pub async fn list_async_jobs(&self, options: ListAsyncJobsOptions) -> Result<Vec<AsyncJob<Value>>, ClientError> {
        let raw: Vec<Value> = self.client.fetch_list(&catalog::LIST_ASYNC_JOBS, options.into()).await?;
        raw.into_iter()
            .map(|value| AsyncJob::from_value(value).map_err(ClientError::from))
            .collect()
    }

    /// Queries one job once. Returns `None` if the server does not know it.
    ///
    /// # Errors
    /// See [`JobPoller::query`].
    pub async fn get_async_job_result<R: DeserializeOwned>(
        &self,
        job_id: &JobId,
    ) -> Result<Option<AsyncJob<R>>, ClientError> {
        JobPoller::new(self.client, *self.client.poll_config()).query(job_id).await
    }
}
