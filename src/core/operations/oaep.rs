//! RSA-OAEP key wrapping.
//!
//! This module implements the asymmetric half of the envelope:
//! - RSA-OAEP with SHA-256 as both the digest and the MGF1 hash
//! - Caller-supplied label, bound into the padding
//! - Output length always equals the recipient modulus size

use rand_core::OsRng;
use rsa::Oaep;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::types::{EnvelopePrivateKey, EnvelopePublicKey};

/// Builds the OAEP padding; an empty label is the same as no label.
fn padding(label: &str) -> Oaep {
    if label.is_empty() {
        Oaep::new::<Sha256>()
    } else {
        Oaep::new_with_label::<Sha256, _>(label)
    }
}

/// Wraps key bytes under the recipient's public key.
///
/// # Arguments
///
/// * `recipient` - The recipient's RSA public key
/// * `key` - The session key bytes to wrap
/// * `label` - OAEP label; must match on unwrap
///
/// # Returns
///
/// The RSA ciphertext, exactly `recipient.ciphertext_len()` bytes long.
///
/// # Errors
///
/// Returns `EnvelopeError::CryptoError` if encryption fails.
pub fn wrap_key(
    recipient: &EnvelopePublicKey,
    key: &[u8],
    label: &str,
) -> EnvelopeResult<Vec<u8>> {
    let padding = padding(label);
    recipient
        .as_rsa()
        .encrypt(&mut OsRng, padding, key)
        .map_err(|_| EnvelopeError::CryptoError)
}

/// Unwraps key bytes with the recipient's private key.
///
/// Decryption is blinded. The recovered bytes are zeroized on drop.
///
/// # Errors
///
/// Returns `EnvelopeError::DecryptionFailed` for any padding, label, or key
/// mismatch.
pub fn unwrap_key(
    recipient: &EnvelopePrivateKey,
    wrapped: &[u8],
    label: &str,
) -> EnvelopeResult<Zeroizing<Vec<u8>>> {
    let padding = padding(label);
    recipient
        .as_rsa()
        .decrypt_blinded(&mut OsRng, padding, wrapped)
        .map(Zeroizing::new)
        .map_err(|_| EnvelopeError::DecryptionFailed)
}
