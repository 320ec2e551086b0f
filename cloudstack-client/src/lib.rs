//! Signed command client for the CloudStack management API.
//!
//! Every operation is one GET against `/client/api` carrying a `command`
//! parameter. The [`catalog`] declares each command's required parameters,
//! the shape of its response and what a 404 means for it. The
//! [`CloudStackClient`] signs, sends and decodes those commands, and the
//! [`JobPoller`] waits on the async jobs that mutating commands start.
//!
//! ```no_run
//! # async fn demo() -> Result<(), cloudstack_client::ClientError> {
//! use cloudstack_client::{ClientConfig, CloudStackClient, ListAccountsOptions};
//!
//! let config = ClientConfig::from_env()?;
//! let client = CloudStackClient::new(&config)?;
//! let accounts = client.accounts().list_accounts(ListAccountsOptions::new()).await?;
//! # let _ = accounts;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod features;
pub mod http;
pub mod poller;
pub mod response;
pub mod signer;
pub mod transport;

pub use client::CloudStackClient;
pub use command::{CommandSpec, Fallback, QueryParams, ResponseShape};
pub use config::{ClientConfig, PollConfig, API_PATH};
pub use error::ClientError;
pub use features::*;
pub use http::HyperTransport;
pub use poller::JobPoller;
pub use signer::RequestSigner;
pub use transport::{HttpResponse, Transport};
