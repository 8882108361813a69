//! HS256 known-answer self-test
//!
//! Signs the standard example JWT segments with the secret `123` and prints
//! whether the encoded tag matches the expected literal.
//!
//! Run with: `cargo run --bin hs256_selftest`
//! Set `RUST_LOG=debug` to see the signing events on stderr.

use jwsig_common::LoggingTransformer;
use jwsig_jwt::{JwtResult, base64url_encode, signing_input, verify_signature};

const HEADER: &[u8] = br#"{"alg":"HS256","typ":"JWT"}"#;
const PAYLOAD: &[u8] = br#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#;
const SECRET: &[u8] = b"123";
const HEADER_AND_PAYLOAD: &[u8] = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";
const EXPECTED_TAG: &[u8] = b"pF3q46_CLIyP_1QZPpeccbs-hC4n9YW2VMBjKrSO6Wg";

fn main() -> JwtResult<()> {
    LoggingTransformer::init();

    let derived = signing_input(HEADER, PAYLOAD);
    if derived.as_bytes() != HEADER_AND_PAYLOAD {
        log::warn!(
            "Encoded literals differ from the precomputed signing input (header_b64: {})",
            base64url_encode(HEADER)
        );
    }

    let matched = verify_signature(SECRET, HEADER_AND_PAYLOAD, EXPECTED_TAG)?;
    println!("{matched}");
    Ok(())
}
