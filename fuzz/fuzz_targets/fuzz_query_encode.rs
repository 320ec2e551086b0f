//! Fuzz target: query encoding and signing.
//!
//! Splits the input into key/value pairs and checks that the encoded request
//! line never contains a raw byte outside the unreserved set plus `/` and `,`.

#![no_main]

use cloudstack_client::command::encode_component;
use cloudstack_client::{QueryParams, RequestSigner};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut params = QueryParams::new();
    for pair in text.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if !key.is_empty() {
            params.set(key, value);
        }
    }

    let query = params.to_query_string();
    assert!(query
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b"-._~/,%=&".contains(&b)));
    assert!(encode_component(&text).bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)));

    let signer = RequestSigner::new("fuzz", "secret");
    if let Ok(signed) = signer.signed_query(&params) {
        assert!(signed.contains("&signature="));
    }
});
