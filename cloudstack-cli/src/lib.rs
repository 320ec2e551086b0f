//! Command-line runner for the CloudStack API.
//!
//! Runs any catalogued command by name, or an uncatalogued one as given, and
//! prints the JSON payload. With `--wait` the job started by the command is
//! polled to completion and printed instead.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod args;
pub mod error;
pub mod runner;
