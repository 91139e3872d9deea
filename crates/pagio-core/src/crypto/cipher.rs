//! XChaCha20-Poly1305 encryption and decryption.
//!
//! # Wire Format
//!
//! The ciphertext format is: `nonce (24 bytes) || ciphertext || tag (16 bytes)`
//!
//! - **Nonce**: 24-byte random value, safe to generate randomly without collision risk
//! - **Ciphertext**: Same length as plaintext
//! - **Tag**: 16-byte authentication tag appended by the cipher

use chacha20poly1305::XChaCha20Poly1305;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};

use super::error::{CryptoError, CryptoResult};
use super::key::CodecKey;

/// Size of the XChaCha20-Poly1305 nonce in bytes.
pub const NONCE_SIZE: usize = 24;

/// Size of the Poly1305 authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Minimum size of valid ciphertext (nonce + tag, no plaintext).
pub const MIN_CIPHERTEXT_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Encrypts plaintext using XChaCha20-Poly1305.
///
/// Returns the ciphertext with the nonce prepended:
/// `nonce (24 bytes) || ciphertext || tag (16 bytes)`. A fresh nonce is drawn
/// for every call, so two encryptions of the same plaintext differ.
pub fn encrypt(key: &CodecKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());

    // XChaCha20's 24-byte nonce is safe to generate randomly
    let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    result.extend_from_slice(&nonce);
    result.extend_from_slice(&ciphertext);

    Ok(result)
}

/// Decrypts ciphertext encrypted with [`encrypt`].
///
/// Expects the ciphertext format: `nonce (24 bytes) || ciphertext || tag (16 bytes)`
///
/// # Errors
///
/// - [`CryptoError::CiphertextTooShort`] if the ciphertext is shorter than nonce + tag
/// - [`CryptoError::DecryptionFailed`] if decryption fails (wrong key, corrupted data, or tampering)
pub fn decrypt(key: &CodecKey, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    if ciphertext.len() < MIN_CIPHERTEXT_SIZE {
        return Err(CryptoError::CiphertextTooShort);
    }

    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());

    let (nonce_bytes, encrypted) = ciphertext.split_at(NONCE_SIZE);
    let nonce = nonce_bytes.into();

    cipher
        .decrypt(nonce, encrypted)
        .map_err(|_| CryptoError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = CodecKey::generate();
        let plaintext = b"hello, world!";

        let ciphertext = encrypt(&key, plaintext).unwrap();
        let decrypted = decrypt(&key, &ciphertext).unwrap();

        assert_eq!(plaintext, decrypted.as_slice());
    }

    #[test]
    fn test_encrypt_decrypt_empty() {
        let key = CodecKey::generate();
        let plaintext = b"";

        let ciphertext = encrypt(&key, plaintext).unwrap();
        let decrypted = decrypt(&key, &ciphertext).unwrap();

        assert_eq!(plaintext, decrypted.as_slice());
    }

    #[test]
    fn test_ciphertext_size() {
        let key = CodecKey::generate();
        let plaintext = b"test";

        let ciphertext = encrypt(&key, plaintext).unwrap();

        // nonce (24) + plaintext (4) + tag (16) = 44
        assert_eq!(ciphertext.len(), NONCE_SIZE + plaintext.len() + TAG_SIZE);
    }

    #[test]
    fn test_encrypt_is_not_deterministic() {
        let key = CodecKey::generate();
        let plaintext = b"same input";

        let first = encrypt(&key, plaintext).unwrap();
        let second = encrypt(&key, plaintext).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let key1 = CodecKey::generate();
        let key2 = CodecKey::generate();
        let plaintext = b"secret data";

        let ciphertext = encrypt(&key1, plaintext).unwrap();
        let result = decrypt(&key2, &ciphertext);

        assert_eq!(result, Err(CryptoError::DecryptionFailed));
    }

    #[test]
    fn test_decrypt_tampered_ciphertext() {
        let key = CodecKey::generate();
        let plaintext = b"authentic data";

        let mut ciphertext = encrypt(&key, plaintext).unwrap();
        // Flip one bit in the encrypted payload
        let index = ciphertext.len() - 1;
        ciphertext[index] ^= 0x01;

        let result = decrypt(&key, &ciphertext);
        assert_eq!(result, Err(CryptoError::DecryptionFailed));
    }

    #[test]
    fn test_decrypt_too_short() {
        let key = CodecKey::generate();

        let result = decrypt(&key, &[0u8; MIN_CIPHERTEXT_SIZE - 1]);
        assert_eq!(result, Err(CryptoError::CiphertextTooShort));
    }
}
