//! Cryptographic primitives behind HS256

pub mod hmac_sha256;
