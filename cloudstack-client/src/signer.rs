//! Request signing.
//!
//! The signature is an HMAC-SHA1 over the canonical form of every query
//! parameter except `signature`: each `key=value` with the value fully
//! percent-encoded, sorted, joined with `&` and lower-cased.

use std::fmt;

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::command::{encode_component, encode_request_value, QueryParams};
use crate::ClientError;

type HmacSha1 = Hmac<Sha1>;

/// Signs command queries with an API key pair.
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    secret_key: String,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    #[must_use]
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), secret_key: secret_key.into() }
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Computes the base64 signature of `params`.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the HMAC cannot be keyed.
    pub fn signature(&self, params: &QueryParams) -> Result<String, ClientError> {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| ClientError::Config(format!("secret key: {e}")))?;
        mac.update(canonical_string(params).as_bytes());
        Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// Builds the full signed query string for an encoded command.
    ///
    /// The result is `response=json&<command params>&apiKey=<key>&signature=<sig>`.
    /// A `response`, `apiKey` or `signature` among the command params is
    /// replaced, so the server always answers in JSON.
    ///
    /// # Errors
    /// See [`RequestSigner::signature`].
    pub fn signed_query(&self, command: &QueryParams) -> Result<String, ClientError> {
        let mut params = QueryParams::new().with("response", "json");
        params.merge(command.clone());
        params.set("response", "json");
        params.remove("signature");
        params.remove("apiKey");
        params.set("apiKey", &self.api_key);
        let signature = self.signature(&params)?;
        Ok(format!("{params}&signature={}", encode_request_value(&signature)))
    }
}

/// The string the signature is computed over.
#[must_use]
pub fn canonical_string(params: &QueryParams) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .filter(|(key, _)| *key != "signature")
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect();
    pairs.sort_unstable();
    pairs.join("&").to_lowercase()
}
