//! Transport abstraction trait.
//!
//! Allows swapping the hyper client for an in-memory expectation table in
//! tests without changing encoding, signing or parsing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ClientError;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a signed GET and returns whatever the server answered.
///
/// Implementations must be `Send + Sync`; one transport is shared by every
/// concurrent command.
///
/// # Cancel Safety
/// Dropping the future abandons the request. No client state is touched.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues `GET uri` with `Accept: application/json`.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] if no response was received.
    async fn get(&self, uri: &str) -> Result<HttpResponse, ClientError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, uri: &str) -> Result<HttpResponse, ClientError> {
        (**self).get(uri).await
    }
}
