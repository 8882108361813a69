//! HS256 JSON Web Signatures
//!
//! This crate provides:
//! - Unpadded base64url encoding with padding-tolerant decoding
//! - HMAC-SHA256 tag computation with constant-time verification
//! - Compact `header.payload.signature` assembly and signature checks
//! - A fluent builder with synchronous and tokio-backed actions
//!
//! ```
//! use jwsig_jwt::verify_signature;
//!
//! let signing_input = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";
//! let matched = verify_signature(b"123", signing_input, b"pF3q46_CLIyP_1QZPpeccbs-hC4n9YW2VMBjKrSO6Wg")?;
//! assert!(matched);
//! # Ok::<(), jwsig_jwt::JwtError>(())
//! ```

pub mod api;
pub mod codec;
pub mod crypto;
mod error;
mod types;
mod verify;

pub use api::{AsyncJwtResult, Hs256Builder, Hs256WithSecret, Jws, RECOMMENDED_HS256_KEY_LEN};
pub use codec::{base64url_decode, base64url_decode_str, base64url_encode};
pub use crypto::hmac_sha256::{DIGEST_LEN, Digest, hmac_sha256_sign};
pub use error::*;
pub use types::*;
pub use verify::{compute_signature, sign_compact, signing_input, verify_compact, verify_signature};
