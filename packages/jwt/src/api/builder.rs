//! HS256 builder entry points and actions

use super::async_result::AsyncJwtResult;
use super::keys::validate_hmac_key;
use crate::error::{JwtError, JwtResult};
use crate::types::{Hs256Key, JwtHeader, JwtToken};
use crate::verify::{sign_compact, verify_compact};
use jwsig_common::LoggingTransformer;
use serde::Serialize;
use tokio::sync::oneshot;

/// Direct builder entry point
pub struct Jws;

impl Jws {
    /// HS256 operations
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder::new()
    }
}

/// HS256 builder - initial state
#[derive(Debug, Default)]
pub struct Hs256Builder {
    min_key_len: Option<usize>,
}

impl Hs256Builder {
    /// Builder with no key policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject secrets shorter than `min_len` bytes on every action
    #[must_use]
    pub fn require_min_key_len(mut self, min_len: usize) -> Self {
        self.min_key_len = Some(min_len);
        self
    }

    /// Set the shared secret
    #[must_use]
    pub fn with_secret(self, secret: &[u8]) -> Hs256WithSecret {
        Hs256WithSecret {
            key: Hs256Key::new(secret),
            header: JwtHeader::hs256(),
            min_key_len: self.min_key_len,
        }
    }
}

/// HS256 signer/verifier with a secret configured
#[derive(Debug, Clone)]
pub struct Hs256WithSecret {
    key: Hs256Key,
    header: JwtHeader,
    min_key_len: Option<usize>,
}

impl Hs256WithSecret {
    /// Reject secrets shorter than `min_len` bytes on every action
    #[must_use]
    pub fn require_min_key_len(mut self, min_len: usize) -> Self {
        self.min_key_len = Some(min_len);
        self
    }

    /// Replace the default `{"alg":"HS256","typ":"JWT"}` header
    #[must_use]
    pub fn with_header(mut self, header: JwtHeader) -> Self {
        self.header = header;
        self
    }

    /// Sign an already-serialized payload
    ///
    /// # Errors
    /// Fails on key policy violations or header serialization errors.
    pub fn sign_payload(&self, payload: &[u8]) -> JwtResult<JwtToken> {
        logged("jwt_signing", self.sign_inner(payload))
    }

    /// Serialize `claims` as compact JSON and sign it
    ///
    /// # Errors
    /// Fails on key policy violations or serialization errors.
    pub fn sign_claims<C: Serialize>(&self, claims: &C) -> JwtResult<JwtToken> {
        let result = serialize_claims(claims).and_then(|payload| self.sign_inner(&payload));
        logged("jwt_signing", result)
    }

    /// Verify the signature segment of a compact token
    ///
    /// # Errors
    /// Fails on key policy violations or malformed tokens. A wrong signature
    /// is `Ok(false)`.
    pub fn verify(&self, token: &str) -> JwtResult<bool> {
        logged("jwt_verification", self.verify_inner(token))
    }

    /// [`Hs256WithSecret::sign_claims`] on a tokio task
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn sign_async<C: Serialize>(&self, claims: &C) -> AsyncJwtResult<JwtToken> {
        let payload = match serialize_claims(claims) {
            Ok(payload) => payload,
            Err(e) => return AsyncJwtResult::ready(logged("jwt_signing", Err(e))),
        };

        let signer = self.clone();
        spawn_action(move || logged("jwt_signing", signer.sign_inner(&payload)))
    }

    /// [`Hs256WithSecret::verify`] on a tokio task
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn verify_async(&self, token: impl Into<String>) -> AsyncJwtResult<bool> {
        let token = token.into();
        let verifier = self.clone();
        spawn_action(move || logged("jwt_verification", verifier.verify_inner(&token)))
    }

    fn sign_inner(&self, payload: &[u8]) -> JwtResult<JwtToken> {
        validate_hmac_key(self.key.as_bytes(), self.min_key_len)?;
        let header = self.header.to_json()?;
        sign_compact(self.key.as_bytes(), &header, payload)
    }

    fn verify_inner(&self, token: &str) -> JwtResult<bool> {
        validate_hmac_key(self.key.as_bytes(), self.min_key_len)?;
        verify_compact(self.key.as_bytes(), token)
    }
}

fn serialize_claims<C: Serialize>(claims: &C) -> JwtResult<Vec<u8>> {
    serde_json::to_vec(claims)
        .map_err(|e| JwtError::serialization(&format!("Failed to serialize claims: {e}")))
}

fn spawn_action<T, F>(action: F) -> AsyncJwtResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> JwtResult<T> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        // Yield for cooperative multitasking
        tokio::task::yield_now().await;
        let _ = tx.send(action());
    });

    AsyncJwtResult::new(rx)
}

fn logged<T>(operation: &str, result: JwtResult<T>) -> JwtResult<T> {
    if let Err(e) = &result {
        LoggingTransformer::log_jwt_error(operation, "HS256", &e.to_string());
    }
    result
}
