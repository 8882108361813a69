//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors raised while encoding, signing or splitting tokens
///
/// A signature that simply does not match is not an error; verification
/// reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Base64url input was malformed after padding normalization
    #[error("Invalid base64url input: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Text handed to the decoder contained non-ASCII characters
    #[error("Base64url text must be ASCII")]
    NonAsciiInput,

    /// Key rejected by the MAC or by the configured key policy
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Compact token did not have exactly three segments
    #[error("Invalid compact token format")]
    InvalidFormat,

    /// Header or claims could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Background task ended before returning a result
    #[error("Background task failed")]
    TaskFailed,
}

impl JwtError {
    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }
}
