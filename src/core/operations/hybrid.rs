//! Hybrid RSA-OAEP / AES-256-GCM envelope operations.
//!
//! Encryption:
//! 1. Generate a fresh session key
//! 2. Wrap it with RSA-OAEP/SHA-256 under the recipient key and the label
//! 3. Encrypt the plaintext with AES-256-GCM under the session key
//! 4. Frame as `u16 LE len || wrapped key || ciphertext || tag`
//!
//! Decryption reverses the steps and fails closed: no plaintext is returned
//! unless both the OAEP unwrap and the GCM tag verify.

use crate::core::error::EnvelopeResult;
use crate::core::provider::{CryptoProvider, RustCryptoProvider};
use crate::core::types::{Envelope, EnvelopePrivateKey, EnvelopePublicKey};

/// Seals `plaintext` for `recipient` using the given provider.
///
/// # Arguments
///
/// * `provider` - The cryptographic backend
/// * `recipient` - The recipient's RSA public key
/// * `plaintext` - Bytes to encrypt; may be empty
/// * `label` - OAEP label the recipient must present to open
///
/// # Errors
///
/// Returns `EnvelopeError::SizeOverflow` if the wrapped key does not fit the
/// length prefix, or `EnvelopeError::CryptoError`.
pub fn encrypt_with<P: CryptoProvider + ?Sized>(
    provider: &P,
    recipient: &EnvelopePublicKey,
    plaintext: &[u8],
    label: &str,
) -> EnvelopeResult<Envelope> {
    let session_key = provider.generate_symmetric_key()?;
    let wrapped_key = provider.asymmetric_encrypt(recipient, &session_key, label)?;
    let payload = provider.symmetric_encrypt(session_key, plaintext)?;

    let envelope = Envelope::new(&wrapped_key, &payload)?;
    tracing::debug!(
        key_bits = recipient.bits(),
        label_len = label.len(),
        plaintext_len = plaintext.len(),
        envelope_len = envelope.encoded_len(),
        "sealed envelope"
    );
    Ok(envelope)
}

/// Opens `envelope` with `recipient` using the given provider.
///
/// # Errors
///
/// Returns `EnvelopeError::DecryptionFailed` if the session key cannot be
/// unwrapped, or `EnvelopeError::AuthenticationFailed` if the payload was
/// altered.
pub fn decrypt_with<P: CryptoProvider + ?Sized>(
    provider: &P,
    recipient: &EnvelopePrivateKey,
    envelope: &Envelope,
    label: &str,
) -> EnvelopeResult<Vec<u8>> {
    let opened = provider
        .asymmetric_decrypt(recipient, envelope.wrapped_key(), label)
        .and_then(|opening_key| provider.symmetric_decrypt(opening_key, envelope.payload()));

    match opened {
        Ok(plaintext) => {
            tracing::debug!(
                key_bits = recipient.bits(),
                label_len = label.len(),
                plaintext_len = plaintext.len(),
                "opened envelope"
            );
            Ok(plaintext)
        }
        Err(err) => {
            tracing::debug!(
                key_bits = recipient.bits(),
                envelope_len = envelope.encoded_len(),
                error = %err,
                "failed to open envelope"
            );
            Err(err)
        }
    }
}

/// Seals `plaintext` for `recipient` and returns the serialized envelope.
///
/// # Example
///
/// ```rust
/// use sealed_envelope::{decrypt, encrypt, EnvelopePrivateKey};
///
/// let secret = EnvelopePrivateKey::from_pem(include_str!("../../../tests/fixtures/recipient_pkcs8.pem"))?;
/// let public = secret.public_key();
///
/// let sealed = encrypt(&public, b"Bonjour le monde", "")?;
/// assert_eq!(sealed.len(), 2 + 256 + 16 + 16);
/// assert_eq!(decrypt(&secret, &sealed, "")?, b"Bonjour le monde");
/// # Ok::<(), sealed_envelope::EnvelopeError>(())
/// ```
///
/// # Errors
///
/// See [`encrypt_with`].
pub fn encrypt(
    recipient: &EnvelopePublicKey,
    plaintext: &[u8],
    label: &str,
) -> EnvelopeResult<Vec<u8>> {
    encrypt_with(&RustCryptoProvider, recipient, plaintext, label).map(Envelope::into_bytes)
}

/// Parses and opens a serialized envelope.
///
/// # Errors
///
/// Returns `EnvelopeError::MalformedEnvelope` if the bytes are too short for
/// their frame; otherwise see [`decrypt_with`].
pub fn decrypt(
    recipient: &EnvelopePrivateKey,
    envelope: &[u8],
    label: &str,
) -> EnvelopeResult<Vec<u8>> {
    let envelope = Envelope::try_from(envelope)?;
    decrypt_with(&RustCryptoProvider, recipient, &envelope, label)
}
