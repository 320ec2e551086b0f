//! The command client.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::command::{CommandSpec, Fallback, QueryParams};
use crate::config::{ClientConfig, PollConfig};
use crate::features::{
    AccountApi, AlertApi, AsyncJobApi, DomainApi, FirewallApi, HostApi, IsoApi, OsTypeApi,
    SecurityGroupApi, TemplateApi, VirtualMachineApi, ZoneApi,
};
use crate::http::HyperTransport;
use crate::poller::JobPoller;
use crate::response;
use crate::signer::RequestSigner;
use crate::transport::Transport;
use crate::ClientError;

/// Issues signed commands against one management server.
///
/// The client holds no mutable state; share it behind an `Arc` to issue
/// commands from many tasks.
///
/// # Cancel Safety
/// Every method is cancel safe. Dropping a future abandons the request and,
/// for job waits, stops polling without touching the server-side job.
#[derive(Debug)]
pub struct CloudStackClient<T: Transport = HyperTransport> {
    transport: T,
    signer: RequestSigner,
    api_url: String,
    poll: PollConfig,
}

impl CloudStackClient<HyperTransport> {
    /// Creates a client that talks HTTP through hyper.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the configuration is unusable.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_transport(config, HyperTransport::new(config.request_timeout))
    }
}

impl<T: Transport> CloudStackClient<T> {
    /// Creates a client over a caller-supplied transport.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the configuration is unusable.
    pub fn with_transport(config: &ClientConfig, transport: T) -> Result<Self, ClientError> {
        let api_url = config.api_url()?;
        tracing::info!(endpoint = %api_url, api_key = %config.api_key, "cloudstack client ready");
        Ok(Self {
            transport,
            signer: RequestSigner::new(config.api_key.clone(), config.secret_key()),
            api_url,
            poll: config.poll,
        })
    }

    #[must_use]
    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The full signed URL for `spec` with `params`.
    ///
    /// # Errors
    /// Returns [`ClientError::MissingParameter`] if a required parameter is unset.
    pub fn request_uri(&self, spec: &CommandSpec, params: &QueryParams) -> Result<String, ClientError> {
        let encoded = spec.encode(params)?;
        Ok(format!("{}?{}", self.api_url, self.signer.signed_query(&encoded)?))
    }

    /// Sends a command and returns its body, or `None` when the command's
    /// fallback absorbed a 404.
    async fn send(&self, spec: &CommandSpec, params: &QueryParams) -> Result<Option<String>, ClientError> {
        let uri = self.request_uri(spec, params)?;
        tracing::debug!(command = %spec.name, %uri, "sending command");

        let response = self.transport.get(&uri).await?;
        if response.is_success() {
            return Ok(Some(response.body));
        }

        let message = response::error_message(&response.body);
        if response.status == 404 && spec.fallback != Fallback::Error {
            tracing::debug!(command = %spec.name, fallback = ?spec.fallback, "404 absorbed");
            return Ok(None);
        }
        tracing::warn!(command = %spec.name, status = response.status, %message, "command failed");
        Err(ClientError::from_status(spec.name, response.status, message))
    }

    async fn payload(&self, spec: &CommandSpec, params: &QueryParams) -> Result<Option<Value>, ClientError> {
        match self.send(spec, params).await? {
            Some(body) => response::extract(spec.name, spec.shape, &body),
            None => Ok(None),
        }
    }

    /// Runs a command and returns its raw payload, `Null` when there is none.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] for any failure the command's
    /// fallback does not absorb.
    pub async fn execute(&self, spec: &CommandSpec, params: QueryParams) -> Result<Value, ClientError> {
        Ok(self.payload(spec, &params).await?.unwrap_or(Value::Null))
    }

    /// Runs a command returning a collection.
    ///
    /// # Errors
    /// See [`CloudStackClient::execute`]; items that do not decode as `R`
    /// yield [`ClientError::Parse`].
    pub async fn fetch_list<R: DeserializeOwned>(
        &self,
        spec: &CommandSpec,
        params: QueryParams,
    ) -> Result<Vec<R>, ClientError> {
        let payload = self.payload(spec, &params).await?;
        response::decode_list(spec.name, payload)
    }

    /// Runs a command returning at most one value.
    ///
    /// # Errors
    /// See [`CloudStackClient::fetch_list`].
    pub async fn fetch_one<R: DeserializeOwned>(
        &self,
        spec: &CommandSpec,
        params: QueryParams,
    ) -> Result<Option<R>, ClientError> {
        let payload = self.payload(spec, &params).await?;
        response::decode_one(spec.name, payload)
    }

    /// Runs a command that must return a value.
    ///
    /// # Errors
    /// Returns [`ClientError::Parse`] if the response carries no payload, in
    /// addition to the errors of [`CloudStackClient::fetch_one`].
    pub async fn fetch<R: DeserializeOwned>(&self, spec: &CommandSpec, params: QueryParams) -> Result<R, ClientError> {
        self.fetch_one(spec, params).await?.ok_or_else(|| ClientError::Parse {
            command: spec.name.to_owned(),
            reason: "response carried no payload".to_owned(),
        })
    }

    /// Runs a command whose response is ignored.
    ///
    /// # Errors
    /// See [`CloudStackClient::execute`].
    pub async fn fetch_void(&self, spec: &CommandSpec, params: QueryParams) -> Result<(), ClientError> {
        self.send(spec, &params).await.map(|_| ())
    }

    /// Polls async jobs with this client's [`PollConfig`].
    #[must_use]
    pub fn jobs(&self) -> JobPoller<'_, T> {
        JobPoller::new(self, self.poll)
    }

    #[must_use]
    pub fn accounts(&self) -> AccountApi<'_, T> {
        AccountApi::new(self)
    }

    #[must_use]
    pub fn domains(&self) -> DomainApi<'_, T> {
        DomainApi::new(self)
    }

    /// Zones and pods.
    #[must_use]
    pub fn zones(&self) -> ZoneApi<'_, T> {
        ZoneApi::new(self)
    }

    /// Hosts, clusters, secondary and primary storage.
    #[must_use]
    pub fn hosts(&self) -> HostApi<'_, T> {
        HostApi::new(self)
    }

    /// Ingress, egress and port forwarding rules.
    #[must_use]
    pub fn firewall(&self) -> FirewallApi<'_, T> {
        FirewallApi::new(self)
    }

    #[must_use]
    pub fn security_groups(&self) -> SecurityGroupApi<'_, T> {
        SecurityGroupApi::new(self)
    }

    #[must_use]
    pub fn templates(&self) -> TemplateApi<'_, T> {
        TemplateApi::new(self)
    }

    #[must_use]
    pub fn isos(&self) -> IsoApi<'_, T> {
        IsoApi::new(self)
    }

    #[must_use]
    pub fn virtual_machines(&self) -> VirtualMachineApi<'_, T> {
        VirtualMachineApi::new(self)
    }

    #[must_use]
    pub fn os_types(&self) -> OsTypeApi<'_, T> {
        OsTypeApi::new(self)
    }

    #[must_use]
    pub fn alerts(&self) -> AlertApi<'_, T> {
        AlertApi::new(self)
    }

    #[must_use]
    pub fn async_jobs(&self) -> AsyncJobApi<'_, T> {
        AsyncJobApi::new(self)
    }
}
