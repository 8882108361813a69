//! Common infrastructure shared by the jwsig crates
//!
//! Currently this is the structured logging layer: a single `env_logger`
//! initialization point plus helpers that report signing and verification
//! events without ever writing key material to the log.

pub mod logging;

pub use logging::LoggingTransformer;
