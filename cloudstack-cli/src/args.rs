//! Command-line arguments.
//!
//! Every connection flag falls back to its `CLOUDSTACK_*` environment
//! variable, so a configured shell only needs the command and its parameters.

use std::fmt;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use cloudstack_client::{ClientConfig, PollConfig, QueryParams};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "cloudstack", version, about = "Run CloudStack API commands", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: Connection,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a command and print its JSON payload
    Run(RunArgs),

    /// List the commands known by name
    Commands,
}

/// Where and how to reach the management server.
#[derive(Args)]
pub struct Connection {
    /// Management server root, e.g. http://cloud.example.com:8080
    #[arg(long, global = true, env = "CLOUDSTACK_ENDPOINT")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, env = "CLOUDSTACK_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long, global = true, env = "CLOUDSTACK_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Deadline for a single HTTP exchange, in seconds
    #[arg(long, global = true, env = "CLOUDSTACK_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Delay before the second job status check, in milliseconds
    #[arg(long, global = true, env = "CLOUDSTACK_POLL_INTERVAL_MS")]
    pub poll_interval_ms: Option<u64>,

    /// How long `--wait` polls before giving up, in seconds
    #[arg(long, global = true, env = "CLOUDSTACK_JOB_TIMEOUT_SECS")]
    pub job_timeout_secs: Option<u64>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("job_timeout_secs", &self.job_timeout_secs)
            .finish()
    }
}

impl Connection {
    /// Builds the client configuration.
    ///
    /// # Errors
    /// Returns [`CliError::MissingSetting`] if the endpoint or a key is unset
    /// and [`CliError::Client`] if the poll interval is zero.
    pub fn client_config(&self) -> Result<ClientConfig, CliError> {
        let endpoint = required(self.endpoint.as_deref(), "--endpoint")?;
        let api_key = required(self.api_key.as_deref(), "--api-key")?;
        let secret_key = required(self.secret_key.as_deref(), "--secret-key")?;

        let poll = PollConfig::default().with_overrides(self.poll_interval_ms, self.job_timeout_secs)?;

        Ok(ClientConfig::new(endpoint, api_key, secret_key)
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_poll(poll))
    }
}

fn required<'a>(value: Option<&'a str>, flag: &'static str) -> Result<&'a str, CliError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(CliError::MissingSetting(flag))
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command name, e.g. listZones. Names outside the catalog are sent as given
    pub command: String,

    /// Command parameters
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Poll the returned job until it finishes and print the job
    #[arg(long)]
    pub wait: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl RunArgs {
    /// Parses the positional `key=value` pairs, keeping their order.
    ///
    /// # Errors
    /// Returns [`CliError::InvalidParameter`] for a pair without `=` or with
    /// an empty key.
    pub fn query_params(&self) -> Result<QueryParams, CliError> {
        let mut params = QueryParams::new();
        for pair in &self.params {
            match pair.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    params.set(key, value);
                }
                _ => return Err(CliError::InvalidParameter(pair.clone())),
            }
        }
        Ok(params)
    }
}
