//! Opaque cursor tokens for identifier-ordered pagination.
//!
//! A cursor token is the sealed form of a single record identifier. The
//! codec encrypts the identifier under a process-wide key, so a token leaks
//! nothing about the identifier it carries and cannot be forged or
//! incremented into a neighboring one. Tokens are URL-safe strings and carry
//! no ordering visible to the holder.

mod codec;
mod error;

pub use codec::TokenCodec;
pub use error::{TokenError, TokenResult};
