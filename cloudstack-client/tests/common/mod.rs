//! Shared harness for expectation tests: an in-memory transport that maps
//! exact request URLs to canned responses.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use cloudstack_client::{
    ClientConfig, ClientError, CloudStackClient, HttpResponse, PollConfig, Transport,
};

pub const ENDPOINT: &str = "http://localhost:8080";

/// Maps each expected URL to a queue of responses. The last response of a
/// queue repeats once the others are used up.
#[derive(Debug, Default)]
pub struct ExpectTransport {
    routes: Mutex<HashMap<String, VecDeque<HttpResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl ExpectTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(self, uri: impl Into<String>, response: HttpResponse) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .entry(uri.into())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl Transport for ExpectTransport {
    async fn get(&self, uri: &str) -> Result<HttpResponse, ClientError> {
        self.calls.lock().expect("calls lock").push(uri.to_owned());
        let mut routes = self.routes.lock().expect("routes lock");
        let queue = routes
            .get_mut(uri)
            .ok_or_else(|| ClientError::Transport(format!("unexpected request {uri}")))?;
        let response = if queue.len() > 1 { queue.pop_front() } else { queue.front().cloned() };
        response.ok_or_else(|| ClientError::Transport(format!("no response queued for {uri}")))
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new(ENDPOINT, "identity", "credential")
        .with_poll(PollConfig::fixed(Duration::from_secs(1), Duration::from_secs(30)))
}

/// A client over `transport`, shared so tests can inspect recorded calls.
pub fn client(transport: ExpectTransport) -> (CloudStackClient<Arc<ExpectTransport>>, Arc<ExpectTransport>) {
    let transport = Arc::new(transport);
    let client = match CloudStackClient::with_transport(&config(), Arc::clone(&transport)) {
        Ok(c) => c,
        Err(e) => panic!("test config must be valid: {e}"),
    };
    (client, transport)
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::ok(body)
}

pub fn status(code: u16, body: &str) -> HttpResponse {
    HttpResponse::new(code, body)
}

pub fn not_found() -> HttpResponse {
    HttpResponse::new(404, "")
}
