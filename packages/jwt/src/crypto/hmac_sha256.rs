//! HMAC-SHA256 operations for JWT signing and verification

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 digest
pub const DIGEST_LEN: usize = 32;

/// Raw HMAC-SHA256 tag
pub type Digest = [u8; DIGEST_LEN];

/// HMAC-SHA256 over raw bytes
///
/// Any key length is accepted; keys longer than the SHA-256 block size are
/// hashed first, as HMAC prescribes.
///
/// # Errors
/// Returns `JwtError::InvalidKey` if the MAC cannot be keyed.
pub fn hmac_sha256_sign(data: &[u8], secret: &[u8]) -> JwtResult<Digest> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// Constant-time equality for tags and encoded tags
///
/// Length is not secret; unequal lengths return `false` immediately.
#[inline]
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
