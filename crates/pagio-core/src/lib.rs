#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for cursor token operations.
pub const TRACING_TARGET_TOKEN: &str = "pagio_core::token";

pub mod crypto;
pub mod token;

// Re-export key types for convenience
pub use crypto::{CodecKey, CryptoError, CryptoResult};
pub use token::{TokenCodec, TokenError, TokenResult};
