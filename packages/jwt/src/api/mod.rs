//! Fluent HS256 API
//!
//! `Jws::hs256().with_secret(..)` configures a signer/verifier; the
//! `sign_*`/`verify` actions run synchronously and the `*_async` actions run
//! on a tokio task.

pub mod async_result;
pub mod builder;
pub mod keys;

pub use async_result::AsyncJwtResult;
pub use builder::{Hs256Builder, Hs256WithSecret, Jws};
pub use keys::RECOMMENDED_HS256_KEY_LEN;
