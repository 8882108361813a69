//! HS256 signing and verification over compact JWS segments
//!
//! The signature of a JWS is `base64url(HMAC-SHA256(secret, header_b64 "." payload_b64))`.
//! Nothing here parses the header or payload JSON; segments are treated as
//! opaque bytes.

use crate::codec::base64url_encode;
use crate::crypto::hmac_sha256::{constant_time_eq, hmac_sha256_sign};
use crate::error::JwtResult;
use crate::types::{JwtToken, SigningInput, split_compact};
use jwsig_common::LoggingTransformer;

const ALG: &str = "HS256";

/// Build the signing input from raw header and payload bytes
#[must_use]
pub fn signing_input(header: &[u8], payload: &[u8]) -> SigningInput {
    SigningInput::from_parts(header, payload)
}

/// Base64url-encoded HS256 tag of `signing_input`
///
/// # Errors
/// Propagates MAC keying failures.
pub fn compute_signature(secret: &[u8], signing_input: &[u8]) -> JwtResult<String> {
    LoggingTransformer::log_signing(ALG, secret, signing_input.len());
    let tag = hmac_sha256_sign(signing_input, secret)?;
    Ok(base64url_encode(&tag))
}

/// Check an encoded HS256 tag against `signing_input`
///
/// Returns `Ok(false)` on mismatch. The comparison runs in constant time.
///
/// # Errors
/// Propagates MAC keying failures.
pub fn verify_signature(secret: &[u8], signing_input: &[u8], expected_tag: &[u8]) -> JwtResult<bool> {
    let computed = compute_signature(secret, signing_input)?;
    let matched = constant_time_eq(computed.as_bytes(), expected_tag);
    LoggingTransformer::log_verification(ALG, secret, matched);
    Ok(matched)
}

/// Sign raw header and payload bytes into a compact token
///
/// # Errors
/// Propagates MAC keying failures.
pub fn sign_compact(secret: &[u8], header: &[u8], payload: &[u8]) -> JwtResult<JwtToken> {
    let input = signing_input(header, payload);
    let signature = compute_signature(secret, input.as_bytes())?;
    tracing::debug!(len = input.as_str().len(), "assembled compact HS256 token");
    Ok(JwtToken(format!("{input}.{signature}")))
}

/// Verify the signature segment of a compact token
///
/// # Errors
/// Returns `JwtError::InvalidFormat` unless the token has exactly three
/// segments; a wrong signature is `Ok(false)`.
pub fn verify_compact(secret: &[u8], token: &str) -> JwtResult<bool> {
    let (header, payload, signature) = split_compact(token)?;
    let input = &token[..header.len() + 1 + payload.len()];
    verify_signature(secret, input.as_bytes(), signature.as_bytes())
}
