//! Fuzz target: response body extraction.
//!
//! Arbitrary bodies go through every response shape and the error-message
//! scraper. Malformed JSON must come back as an error, never a panic.

#![no_main]

use cloudstack_client::response;
use cloudstack_client::ResponseShape;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    for shape in [ResponseShape::Named("jobid"), ResponseShape::UnwrapOnly, ResponseShape::Discard] {
        if let Ok(payload) = response::extract("fuzz", shape, body) {
            let _ = response::decode_list::<serde_json::Value>("fuzz", payload.clone());
            let _ = response::decode_one::<serde_json::Value>("fuzz", payload);
        }
    }
    let _ = response::error_message(body);
});
