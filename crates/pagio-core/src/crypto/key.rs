//! Symmetric key material for the token codec.

use std::fmt;

use base64::prelude::*;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};

use super::error::{CryptoError, CryptoResult};

/// Size of the XChaCha20-Poly1305 key in bytes.
pub const KEY_SIZE: usize = 32;

/// A 256-bit symmetric key for sealing and opening cursor tokens.
///
/// Keys are injected explicitly into the codec constructor; nothing in this
/// crate reads key material from the environment. Rotating the key
/// invalidates every previously issued token - there is no multi-key grace
/// period.
#[derive(Clone, PartialEq, Eq)]
pub struct CodecKey([u8; KEY_SIZE]);

impl CodecKey {
    /// Generates a new random key from the operating system's RNG.
    pub fn generate() -> Self {
        let key = XChaCha20Poly1305::generate_key(&mut OsRng);
        Self(key.into())
    }

    /// Creates a key from exactly [`KEY_SIZE`] raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKeyLength`] if the slice is not exactly
    /// [`KEY_SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; KEY_SIZE] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: KEY_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Creates a key from a standard base64 string.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| CryptoError::InvalidKeyEncoding("base64"))?;
        Self::from_slice(&bytes)
    }

    /// Creates a key from a hex string.
    pub fn from_hex(encoded: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(encoded).map_err(|_| CryptoError::InvalidKeyEncoding("hex"))?;
        Self::from_slice(&bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for CodecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material is never printed.
        f.debug_struct("CodecKey").finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for CodecKey {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}
