//! HMAC key policy

use crate::error::JwtError;

/// Key length matching the HS256 digest size (RFC 7518 §3.2)
pub const RECOMMENDED_HS256_KEY_LEN: usize = 32;

/// Enforce an optional minimum HMAC secret length
///
/// No policy means any secret, including an empty one, is accepted.
pub(crate) fn validate_hmac_key(secret: &[u8], min_len: Option<usize>) -> Result<(), JwtError> {
    let Some(min_len) = min_len else {
        return Ok(());
    };

    if secret.len() < min_len {
        return Err(JwtError::invalid_key(&format!(
            "HMAC key for HS256 must be at least {} bytes, got {}",
            min_len,
            secret.len()
        )));
    }

    Ok(())
}
