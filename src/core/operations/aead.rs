//! AES-256-GCM with a fixed all-zero nonce.
//!
//! This module implements the symmetric half of the envelope:
//! - AES-256-GCM, 12-byte nonce of zeros, no associated data
//! - Output is `ciphertext || 16-byte tag`
//!
//! # Security
//!
//! A fixed nonce is only acceptable because every key reaching these
//! functions is a single-use session key. They are crate-private and only
//! reachable through [`SessionKey::seal`](crate::SessionKey::seal) and
//! [`OpeningKey::open`](crate::OpeningKey::open), which consume the key.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// Size of the AES-GCM nonce.
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag.
pub const TAG_SIZE: usize = 16;

/// The nonce used for every payload.
const ZERO_NONCE: [u8; NONCE_SIZE] = [0u8; NONCE_SIZE];

/// Encrypts a payload under a single-use session key.
pub(crate) fn seal_payload(key: &[u8; 32], plaintext: &[u8]) -> EnvelopeResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(&ZERO_NONCE), plaintext)
        .map_err(|_| EnvelopeError::CryptoError)
}

/// Decrypts and verifies a payload sealed by [`seal_payload`].
pub(crate) fn open_payload(key: &[u8; 32], ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>> {
    if ciphertext.len() < TAG_SIZE {
        return Err(EnvelopeError::AuthenticationFailed);
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(&ZERO_NONCE), ciphertext)
        .map_err(|_| EnvelopeError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x42u8; 32];

    #[test]
    fn test_seal_open_roundtrip() -> EnvelopeResult<()> {
        let sealed = seal_payload(&KEY, b"Hello, AES-256-GCM!")?;
        let opened = open_payload(&KEY, &sealed)?;
        assert_eq!(opened, b"Hello, AES-256-GCM!");
        Ok(())
    }

    #[test]
    fn test_output_is_plaintext_plus_tag() -> EnvelopeResult<()> {
        assert_eq!(seal_payload(&KEY, b"")?.len(), TAG_SIZE);
        assert_eq!(seal_payload(&KEY, &[0u8; 100])?.len(), 100 + TAG_SIZE);
        Ok(())
    }

    #[test]
    fn test_zero_nonce_is_deterministic() -> EnvelopeResult<()> {
        // Same key and plaintext always produce the same ciphertext; this is
        // why keys must never be reused.
        assert_eq!(seal_payload(&KEY, b"abc")?, seal_payload(&KEY, b"abc")?);
        Ok(())
    }

    #[test]
    fn test_known_answer() -> EnvelopeResult<()> {
        // AES-256-GCM, zero key, zero nonce, empty plaintext (NIST GCM test case 13).
        let sealed = seal_payload(&[0u8; 32], b"")?;
        assert_eq!(
            sealed,
            [
                0x53, 0x0f, 0x8a, 0xfb, 0xc7, 0x45, 0x36, 0xb9, 0xa9, 0x63, 0xb4, 0xf1, 0xc4, 0xcb,
                0x73, 0x8b,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_tampered_ciphertext() -> EnvelopeResult<()> {
        let mut sealed = seal_payload(&KEY, b"secret")?;
        sealed[0] ^= 0x01;
        let result = open_payload(&KEY, &sealed);
        assert!(matches!(result, Err(EnvelopeError::AuthenticationFailed)));
        Ok(())
    }

    #[test]
    fn test_tampered_tag() -> EnvelopeResult<()> {
        let mut sealed = seal_payload(&KEY, b"secret")?;
        let last = sealed.len() - 1;
        sealed[last] ^= 0x80;
        let result = open_payload(&KEY, &sealed);
        assert!(matches!(result, Err(EnvelopeError::AuthenticationFailed)));
        Ok(())
    }

    #[test]
    fn test_too_short_for_tag() {
        let result = open_payload(&KEY, &[0u8; TAG_SIZE - 1]);
        assert!(matches!(result, Err(EnvelopeError::AuthenticationFailed)));

        let result = open_payload(&KEY, &[]);
        assert!(matches!(result, Err(EnvelopeError::AuthenticationFailed)));
    }
}
