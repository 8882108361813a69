//! JWT type definitions

use crate::codec::base64url_encode;
use crate::error::{JwtError, JwtResult};
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// JOSE header used when signing
///
/// Serializes to `{"alg":"HS256","typ":"JWT"}` by default. It is only ever
/// written, never parsed back during verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JwtHeader {
    /// Signing algorithm, always `HS256` here
    pub alg: String,
    /// Media type of the token
    pub typ: String,
    /// Optional key identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl JwtHeader {
    /// Header for the HS256 algorithm
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
            kid: None,
        }
    }

    /// Attach a `kid` key identifier
    #[must_use]
    pub fn with_key_id(mut self, kid: String) -> Self {
        self.kid = Some(kid);
        self
    }

    /// Compact JSON bytes of the header
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the header cannot be serialized.
    pub fn to_json(&self) -> JwtResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| JwtError::serialization(&e.to_string()))
    }
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::hs256()
    }
}

/// The `header_b64.payload_b64` bytes that get signed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningInput(String);

impl SigningInput {
    /// Encode raw header and payload bytes and join them with `.`
    #[must_use]
    pub fn from_parts(header: &[u8], payload: &[u8]) -> Self {
        let header_b64 = base64url_encode(header);
        let payload_b64 = base64url_encode(payload);
        Self(format!("{header_b64}.{payload_b64}"))
    }

    /// Bytes fed to the MAC
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The signing input as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for SigningInput {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Display for SigningInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compact JWS serialization `header.payload.signature`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtToken(pub String);

impl JwtToken {
    /// Split into `(header_b64, payload_b64, signature_b64)`
    ///
    /// # Errors
    /// Returns `JwtError::InvalidFormat` unless there are exactly three
    /// dot-separated segments.
    pub fn segments(&self) -> JwtResult<(&str, &str, &str)> {
        split_compact(&self.0)
    }

    /// The signed `header.payload` prefix
    ///
    /// # Errors
    /// Same as [`JwtToken::segments`].
    pub fn signing_input(&self) -> JwtResult<&str> {
        let (header, payload, _) = self.segments()?;
        Ok(&self.0[..header.len() + 1 + payload.len()])
    }
}

pub(crate) fn split_compact(token: &str) -> JwtResult<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok((header, payload, signature)),
        _ => Err(JwtError::InvalidFormat),
    }
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HS256 shared secret, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hs256Key(Vec<u8>);

impl Hs256Key {
    /// Copy `secret` into a key that is wiped on drop
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self(secret.to_vec())
    }

    /// Raw secret bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Hs256Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hs256Key")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}
