//! Structured logging built on `env_logger`
//!
//! Configure levels through `RUST_LOG`:
//! - `RUST_LOG=debug` - everything, including per-signature events
//! - `RUST_LOG=info` - startup and verification outcomes
//! - `RUST_LOG=jwsig_jwt=debug` - module-specific levels

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points used across the workspace
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once at application startup
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for tests; repeated calls are harmless
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed JWT operation
    ///
    /// Only the operation, algorithm and error text are recorded.
    pub fn log_jwt_error(operation: &str, algorithm: &str, error: &str) {
        error!("JWT operation failed: {operation} (alg: {algorithm}, error: {error})");
    }

    /// Log a signature being produced under the given key
    pub fn log_signing(algorithm: &str, key: &[u8], input_len: usize) {
        let key_id = Self::key_fingerprint(key);
        debug!("Signing {input_len} bytes with {algorithm} (key: {key_id})");
    }

    /// Log the outcome of a signature check
    pub fn log_verification(algorithm: &str, key: &[u8], matched: bool) {
        let key_id = Self::key_fingerprint(key);
        if matched {
            info!("Signature verified: {algorithm} (key: {key_id})");
        } else {
            warn!("Signature mismatch: {algorithm} (key: {key_id})");
        }
    }

    /// Short SHA-256 fingerprint of key material, safe to log
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn key_fingerprint(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = hex::encode(hash);
        format!("#{}", &hex_hash[..12])
    }
}
