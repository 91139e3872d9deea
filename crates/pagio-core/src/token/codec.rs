//! Reversible mapping between record identifiers and opaque tokens.

use std::fmt;

use base64::prelude::*;

use super::error::{TokenError, TokenResult};
use crate::TRACING_TARGET_TOKEN;
use crate::crypto::{self, CodecKey};

/// Number of plaintext bytes in a sealed identifier (big-endian `i64`).
const ID_SIZE: usize = 8;

/// Codec sealing record identifiers into opaque cursor tokens.
///
/// Encoding draws a fresh nonce per call, so the same identifier maps to a
/// different token every time; every token still decodes back to exactly the
/// identifier it was produced from. Decoding anything the codec did not
/// produce under the same key fails - it never silently returns a wrong
/// identifier.
///
/// The key is injected at construction (see [`CodecKey`]); the codec itself
/// is stateless and cheap to share by reference.
///
/// # Example
///
/// ```rust,ignore
/// use pagio_core::{CodecKey, TokenCodec};
///
/// let codec = TokenCodec::new(CodecKey::generate());
/// let token = codec.encode(42)?;
/// assert_eq!(codec.decode(&token)?, 42);
/// ```
#[derive(Clone)]
pub struct TokenCodec {
    key: CodecKey,
}

impl TokenCodec {
    /// Creates a codec sealing tokens under the given key.
    pub fn new(key: CodecKey) -> Self {
        Self { key }
    }

    /// Seals a positive identifier into an opaque URL-safe token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidId`] for non-positive identifiers.
    pub fn encode(&self, id: i64) -> TokenResult<String> {
        if id <= 0 {
            return Err(TokenError::InvalidId(id));
        }

        let sealed = crypto::encrypt(&self.key, &id.to_be_bytes()).map_err(TokenError::Seal)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(sealed))
    }

    /// Opens a token back into the identifier it was sealed from.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidToken`] if the token is malformed, was
    /// produced under a different key, or has been tampered with. There is no
    /// partial success.
    pub fn decode(&self, token: &str) -> TokenResult<i64> {
        let sealed = BASE64_URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| TokenError::InvalidToken)?;

        let plaintext = crypto::decrypt(&self.key, &sealed).map_err(|err| {
            tracing::debug!(
                target: TRACING_TARGET_TOKEN,
                error = %err,
                "Cursor token failed authentication"
            );
            TokenError::InvalidToken
        })?;

        let bytes: [u8; ID_SIZE] = plaintext
            .as_slice()
            .try_into()
            .map_err(|_| TokenError::InvalidToken)?;

        let id = i64::from_be_bytes(bytes);
        if id <= 0 {
            return Err(TokenError::InvalidToken);
        }

        Ok(id)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_codec() -> TokenCodec {
        TokenCodec::new(CodecKey::from_bytes([7u8; 32]))
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let codec = fixed_codec();

        for id in [1, 2, 42, 1_000_000, i64::MAX] {
            let token = codec.encode(id).unwrap();
            assert_eq!(codec.decode(&token).unwrap(), id);
        }
    }

    #[test]
    fn test_encode_is_not_deterministic() {
        let codec = fixed_codec();

        let first = codec.encode(42).unwrap();
        let second = codec.encode(42).unwrap();

        assert_ne!(first, second);
        assert_eq!(codec.decode(&first).unwrap(), 42);
        assert_eq!(codec.decode(&second).unwrap(), 42);
    }

    #[test]
    fn test_encode_rejects_non_positive_ids() {
        let codec = fixed_codec();

        assert_eq!(codec.encode(0), Err(TokenError::InvalidId(0)));
        assert_eq!(codec.encode(-5), Err(TokenError::InvalidId(-5)));
    }

    #[test]
    fn test_token_is_url_safe() {
        let codec = fixed_codec();
        let token = codec.encode(i64::MAX).unwrap();

        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_decode_rejects_tampered_tokens() {
        let codec = fixed_codec();
        let token = codec.encode(42).unwrap();
        let sealed = BASE64_URL_SAFE_NO_PAD.decode(&token).unwrap();

        // Flipping any single byte must invalidate the token.
        for index in 0..sealed.len() {
            let mut tampered = sealed.clone();
            tampered[index] ^= 0xFF;
            let tampered_token = BASE64_URL_SAFE_NO_PAD.encode(&tampered);

            assert_eq!(
                codec.decode(&tampered_token),
                Err(TokenError::InvalidToken),
                "byte {index} flipped but token still decoded"
            );
        }
    }

    #[test]
    fn test_decode_rejects_truncated_tokens() {
        let codec = fixed_codec();
        let token = codec.encode(42).unwrap();

        assert_eq!(
            codec.decode(&token[..token.len() / 2]),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = fixed_codec();

        assert_eq!(codec.decode(""), Err(TokenError::InvalidToken));
        assert_eq!(codec.decode("not a token"), Err(TokenError::InvalidToken));
        assert_eq!(codec.decode("AAAA"), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_decode_rejects_foreign_key() {
        let ours = fixed_codec();
        let theirs = TokenCodec::new(CodecKey::from_bytes([9u8; 32]));

        let token = theirs.encode(42).unwrap();
        assert_eq!(ours.decode(&token), Err(TokenError::InvalidToken));
    }
}
