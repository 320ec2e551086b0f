//! Client and polling configuration.

use std::fmt;
use std::time::Duration;

use crate::ClientError;

/// Path of the command endpoint below the management server root.
pub const API_PATH: &str = "/client/api";

/// How an async job is polled until it reaches a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PollConfig {
    /// Delay before the second status check.
    pub initial_interval: Duration,
    /// Multiplier applied to the delay after every check.
    pub backoff_factor: u32,
    /// Upper bound on the delay between checks.
    pub max_interval: Duration,
    /// Total time to wait before giving up with `JobTimeout`.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(1),
            backoff_factor: 2,
            max_interval: Duration::from_secs(10),
            timeout: Duration::from_secs(600),
        }
    }
}

impl PollConfig {
    /// Shortest delay ever slept between two status checks.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

    /// Polls at a constant interval, no shorter than [`PollConfig::MIN_INTERVAL`].
    #[must_use]
    pub fn fixed(interval: Duration, timeout: Duration) -> Self {
        let interval = interval.max(Self::MIN_INTERVAL);
        Self { initial_interval: interval, backoff_factor: 1, max_interval: interval, timeout }
    }

    /// Applies the optional `CLOUDSTACK_POLL_INTERVAL_MS` and
    /// `CLOUDSTACK_JOB_TIMEOUT_SECS` settings to `self`.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the interval is zero.
    pub fn with_overrides(self, interval_ms: Option<u64>, timeout_secs: Option<u64>) -> Result<Self, ClientError> {
        let mut poll = self;
        if let Some(ms) = interval_ms {
            if ms == 0 {
                return Err(ClientError::Config("poll interval must be at least 1 ms".to_owned()));
            }
            poll = poll.with_initial_interval(Duration::from_millis(ms));
        }
        if let Some(secs) = timeout_secs {
            poll = poll.with_timeout(Duration::from_secs(secs));
        }
        Ok(poll)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        let interval = interval.max(Self::MIN_INTERVAL);
        self.initial_interval = interval;
        if self.max_interval < interval {
            self.max_interval = interval;
        }
        self
    }

    /// The delay to use after one that lasted `current`.
    #[must_use]
    pub fn next_interval(&self, current: Duration) -> Duration {
        current
            .saturating_mul(self.backoff_factor.max(1))
            .min(self.max_interval)
            .max(Self::MIN_INTERVAL)
    }

    /// When a wait starting at `now` gives up. A timeout too large to add to
    /// `now` waits for as long as the clock allows.
    #[must_use]
    pub fn deadline_from(&self, now: tokio::time::Instant) -> tokio::time::Instant {
        const FAR_FUTURE: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);
        now.checked_add(self.timeout)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now)
    }
}

/// Connection settings for one CloudStack management server.
#[derive(Clone)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Server root, e.g. `http://cloud.example.com:8080`. A trailing
    /// `/client/api` is accepted and not duplicated.
    pub endpoint: String,
    pub api_key: String,
    secret_key: String,
    /// Deadline for a single HTTP exchange.
    pub request_timeout: Duration,
    pub poll: PollConfig,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("poll", &self.poll)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration with a 30 second request timeout and the
    /// default [`PollConfig`].
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            request_timeout: Duration::from_secs(30),
            poll: PollConfig::default(),
        }
    }

    /// Reads the configuration from `CLOUDSTACK_*` environment variables.
    ///
    /// `CLOUDSTACK_ENDPOINT`, `CLOUDSTACK_API_KEY` and `CLOUDSTACK_SECRET_KEY`
    /// are required. `CLOUDSTACK_POLL_INTERVAL_MS` and
    /// `CLOUDSTACK_JOB_TIMEOUT_SECS` override the polling defaults.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if a required variable is missing, a
    /// numeric one does not parse or the poll interval is zero.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ClientError::Config(format!("{key} is not set")))
        };
        let mut config = Self::new(
            required("CLOUDSTACK_ENDPOINT")?,
            required("CLOUDSTACK_API_KEY")?,
            required("CLOUDSTACK_SECRET_KEY")?,
        );
        config.poll = config.poll.with_overrides(
            parse_number(&lookup, "CLOUDSTACK_POLL_INTERVAL_MS")?,
            parse_number(&lookup, "CLOUDSTACK_JOB_TIMEOUT_SECS")?,
        )?;
        Ok(config)
    }

    #[must_use]
    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Full URL of the command endpoint.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the endpoint is not a plain `http`
    /// URL or a key is empty.
    pub fn api_url(&self) -> Result<String, ClientError> {
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        if endpoint.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "endpoint {endpoint} uses https, which this client does not support"
            )));
        }
        if !endpoint.starts_with("http://") || endpoint.len() <= "http://".len() {
            return Err(ClientError::Config(format!("endpoint '{endpoint}' is not an http URL")));
        }
        if self.api_key.is_empty() || self.secret_key.is_empty() {
            return Err(ClientError::Config("api key and secret key must be set".to_owned()));
        }
        if endpoint.ends_with(API_PATH) {
            Ok(endpoint.to_owned())
        } else {
            Ok(format!("{endpoint}{API_PATH}"))
        }
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<u64>, ClientError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| ClientError::Config(format!("{key}='{raw}': {e}")))
        })
        .transpose()
}
