//! HTTP transport over hyper.
//!
//! Uses the pooled legacy client from `hyper-util`, so connections to the
//! management server are reused across commands. Plain HTTP only.

use std::time::Duration;

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::ACCEPT;
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::transport::{HttpResponse, Transport};
use crate::ClientError;

/// [`Transport`] backed by a pooled hyper client.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Empty<Bytes>>,
    timeout: Duration,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport").field("timeout", &self.timeout).finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Creates a transport whose exchanges each time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client, timeout }
    }

    async fn exchange(&self, uri: Uri) -> Result<HttpResponse, ClientError> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())
            .map_err(|e| ClientError::Transport(format!("build request: {e}")))?;

        let resp = self
            .client
            .request(req)
            .await
            .map_err(|e| ClientError::Transport(format!("send request: {e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| ClientError::Transport(format!("read response body: {e}")))?
            .to_bytes();

        Ok(HttpResponse::new(status, String::from_utf8_lossy(&body).into_owned()))
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn get(&self, uri: &str) -> Result<HttpResponse, ClientError> {
        let parsed: Uri = uri
            .parse()
            .map_err(|e| ClientError::Transport(format!("invalid URI {uri}: {e}")))?;
        if parsed.scheme_str() != Some("http") {
            return Err(ClientError::Config(format!("unsupported scheme in {uri}")));
        }

        let started = tokio::time::Instant::now();
        let response = tokio::time::timeout(self.timeout, self.exchange(parsed))
            .await
            .map_err(|_| ClientError::Transport(format!("request timed out after {:?}", self.timeout)))??;

        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "http exchange complete"
        );
        Ok(response)
    }
}
