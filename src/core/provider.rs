//! Pluggable cryptographic backend.
//!
//! [`CryptoProvider`] names the five primitives the hybrid scheme is built
//! from. The envelope logic in [`crate::core::operations::hybrid`] only talks
//! to this trait, so a platform keystore or HSM can stand in for the pure-Rust
//! default, [`RustCryptoProvider`].

use core::fmt::Debug;

use crate::core::error::EnvelopeResult;
use crate::core::operations::oaep;
use crate::core::types::{EnvelopePrivateKey, EnvelopePublicKey, OpeningKey, SessionKey};

/// Cryptographic primitives used to seal and open envelopes.
///
/// Implementations must be usable from several threads at once.
pub trait CryptoProvider: Debug + Send + Sync {
    /// Generates a fresh single-use AES-256 key.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if the RNG fails.
    fn generate_symmetric_key(&self) -> EnvelopeResult<SessionKey>;

    /// Wraps `key` with RSA-OAEP/SHA-256 under `recipient`, bound to `label`.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if encryption fails.
    fn asymmetric_encrypt(
        &self,
        recipient: &EnvelopePublicKey,
        key: &SessionKey,
        label: &str,
    ) -> EnvelopeResult<Vec<u8>>;

    /// Unwraps a session key with RSA-OAEP/SHA-256.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::DecryptionFailed` if the ciphertext, label or
    /// key do not match.
    fn asymmetric_decrypt(
        &self,
        recipient: &EnvelopePrivateKey,
        wrapped: &[u8],
        label: &str,
    ) -> EnvelopeResult<OpeningKey>;

    /// Encrypts `plaintext` with AES-256-GCM and the zero nonce.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if the cipher fails.
    fn symmetric_encrypt(&self, key: SessionKey, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>>;

    /// Decrypts and verifies an AES-256-GCM payload.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::AuthenticationFailed` if the tag does not verify.
    fn symmetric_decrypt(&self, key: OpeningKey, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>>;

    /// Imports an SPKI or certificate PEM as a recipient key.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the PEM cannot be parsed.
    fn import_public_key(&self, pem: &str) -> EnvelopeResult<EnvelopePublicKey> {
        EnvelopePublicKey::from_pem(pem)
    }
}

/// Pure-Rust backend built on the RustCrypto `rsa` and `aes-gcm` crates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RustCryptoProvider;

impl CryptoProvider for RustCryptoProvider {
    fn generate_symmetric_key(&self) -> EnvelopeResult<SessionKey> {
        SessionKey::generate()
    }

    fn asymmetric_encrypt(
        &self,
        recipient: &EnvelopePublicKey,
        key: &SessionKey,
        label: &str,
    ) -> EnvelopeResult<Vec<u8>> {
        oaep::wrap_key(recipient, key.as_bytes(), label)
    }

    fn asymmetric_decrypt(
        &self,
        recipient: &EnvelopePrivateKey,
        wrapped: &[u8],
        label: &str,
    ) -> EnvelopeResult<OpeningKey> {
        let unwrapped = oaep::unwrap_key(recipient, wrapped, label)?;
        OpeningKey::try_from(unwrapped.as_slice())
    }

    fn symmetric_encrypt(&self, key: SessionKey, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        key.seal(plaintext)
    }

    fn symmetric_decrypt(&self, key: OpeningKey, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        key.open(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EnvelopeError;

    const RECIPIENT_PKCS8: &str = include_str!("../../tests/fixtures/recipient_pkcs8.pem");

    #[test]
    fn test_provider_is_object_safe() {
        let provider: Box<dyn CryptoProvider> = Box::new(RustCryptoProvider);
        assert!(format!("{provider:?}").contains("RustCryptoProvider"));
    }

    #[test]
    fn test_primitives_compose() -> EnvelopeResult<()> {
        let provider = RustCryptoProvider;
        let secret = EnvelopePrivateKey::from_pem(RECIPIENT_PKCS8)?;
        let public = secret.public_key();

        let session_key = provider.generate_symmetric_key()?;
        let wrapped = provider.asymmetric_encrypt(&public, &session_key, "ns/name")?;
        let payload = provider.symmetric_encrypt(session_key, b"payload")?;

        let opening_key = provider.asymmetric_decrypt(&secret, &wrapped, "ns/name")?;
        let plaintext = provider.symmetric_decrypt(opening_key, &payload)?;
        assert_eq!(plaintext, b"payload");
        Ok(())
    }

    #[test]
    fn test_wrong_size_unwrap_is_decryption_failure() -> EnvelopeResult<()> {
        let provider = RustCryptoProvider;
        let secret = EnvelopePrivateKey::from_pem(RECIPIENT_PKCS8)?;

        // A well-formed OAEP ciphertext that carries 16 bytes, not a session key.
        let wrapped = oaep::wrap_key(&secret.public_key(), &[0x11; 16], "")?;
        let result = provider.asymmetric_decrypt(&secret, &wrapped, "");
        assert!(matches!(result, Err(EnvelopeError::DecryptionFailed)));
        Ok(())
    }
}
