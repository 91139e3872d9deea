//! Cryptographic utilities for sealing identifiers.
//!
//! This module provides encryption and decryption utilities using
//! XChaCha20-Poly1305, a modern AEAD cipher. The token codec builds on it to
//! produce cursor tokens that are confidential (the identifier is not
//! recoverable without the key) and authenticated (tampered or forged input
//! fails to decrypt).
//!
//! # Example
//!
//! ```rust,ignore
//! use pagio_core::crypto::{CodecKey, decrypt, encrypt};
//!
//! // Generate a new random key
//! let key = CodecKey::generate();
//!
//! // Seal some data
//! let plaintext = b"sealed identifier";
//! let ciphertext = encrypt(&key, plaintext)?;
//!
//! // Open it again
//! let decrypted = decrypt(&key, &ciphertext)?;
//! assert_eq!(plaintext, decrypted.as_slice());
//! ```

mod cipher;
mod error;
mod key;

pub use cipher::{MIN_CIPHERTEXT_SIZE, NONCE_SIZE, TAG_SIZE, decrypt, encrypt};
pub use error::{CryptoError, CryptoResult};
pub use key::{CodecKey, KEY_SIZE};
