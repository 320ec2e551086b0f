//! Fuzz target: async job decoding.
//!
//! Any JSON value that decodes as a job must keep the failure invariant: a
//! failed job has an error and no result.

#![no_main]

use cloudstack_core::{AsyncJob, ResultCode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    if let Ok(job) = AsyncJob::<serde_json::Value>::from_value(value) {
        if job.result_code == ResultCode::Fail || job.has_failed() {
            assert!(job.result.is_none());
            assert!(job.error.is_some());
        }
    }
});
