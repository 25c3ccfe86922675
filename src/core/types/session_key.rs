//! `SessionKey` and `OpeningKey` - single-use AES-256-GCM keys.
//!
//! Every envelope payload is encrypted with AES-256-GCM under an all-zero
//! nonce. That is only sound if the key encrypts exactly one message, so:
//!
//! - a [`SessionKey`] can only be created from a CSPRNG, is not `Clone`, and
//!   [`SessionKey::seal`] takes it by value;
//! - an [`OpeningKey`] is what the decrypt side recovers; it can open a
//!   payload but never exposes its bytes.
//!
//! Both are zeroized on drop, and neither exposes a way to zeroize a live
//! key, which would leave a predictable all-zero key behind.
//!
//! ```rust,compile_fail
//! use sealed_envelope::SessionKey;
//!
//! let key = SessionKey::generate()?;
//! let first = key.seal(b"first")?;
//! let second = key.seal(b"second")?; // use of moved value
//! # Ok::<(), sealed_envelope::EnvelopeError>(())
//! ```
//!
//! ```rust,compile_fail
//! use sealed_envelope::SessionKey;
//! use zeroize::Zeroize;
//!
//! let mut key = SessionKey::generate()?;
//! key.zeroize(); // `Zeroize` is not implemented
//! let sealed = key.seal(b"under an all-zero key")?;
//! # Ok::<(), sealed_envelope::EnvelopeError>(())
//! ```

use core::fmt::{self, Debug};

use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::aead;

/// Size of an AES-256 session key in bytes.
pub const SESSION_KEY_SIZE: usize = 32;

/// A fresh AES-256-GCM key for sealing exactly one payload.
///
/// # Security
///
/// - Only constructible from a cryptographically secure RNG
/// - Consumed by [`SessionKey::seal`], so it cannot encrypt twice
/// - Key material is zeroized on drop
/// - Debug output redacts the key
///
/// # Example
///
/// ```rust
/// use sealed_envelope::SessionKey;
///
/// let key = SessionKey::generate()?;
/// let sealed = key.seal(b"Bonjour le monde")?;
/// assert_eq!(sealed.len(), 16 + 16);
/// # Ok::<(), sealed_envelope::EnvelopeError>(())
/// ```
pub struct SessionKey {
    key: [u8; SESSION_KEY_SIZE],
}

impl SessionKey {
    /// Generates a new key from the operating system RNG.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if the RNG fails.
    pub fn generate() -> EnvelopeResult<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new key from the given cryptographically secure RNG.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if the RNG fails.
    pub fn generate_with<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> EnvelopeResult<Self> {
        let mut session_key = Self {
            key: [0u8; SESSION_KEY_SIZE],
        };
        rng.try_fill_bytes(&mut session_key.key)
            .map_err(|_| EnvelopeError::CryptoError)?;
        Ok(session_key)
    }

    /// Returns the raw key bytes, for wrapping under the recipient's RSA key.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SESSION_KEY_SIZE] {
        &self.key
    }

    /// Encrypts `plaintext` with the zero nonce, consuming the key.
    ///
    /// Returns `ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if the cipher rejects the input.
    pub fn seal(self, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        aead::seal_payload(&self.key, plaintext)
    }
}

impl Drop for SessionKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl ZeroizeOnDrop for SessionKey {}

impl Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// A recovered session key that can only open a payload.
pub struct OpeningKey {
    key: [u8; SESSION_KEY_SIZE],
}

impl OpeningKey {
    /// Decrypts and authenticates `ciphertext || tag`, consuming the key.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::AuthenticationFailed` if the tag does not verify.
    /// No plaintext is returned in that case.
    pub fn open(self, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        aead::open_payload(&self.key, ciphertext)
    }
}

impl TryFrom<&[u8]> for OpeningKey {
    type Error = EnvelopeError;

    /// Imports recovered key bytes.
    ///
    /// Anything but exactly 32 bytes means the unwrap produced something that
    /// is not a session key, which is reported as a decryption failure.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != SESSION_KEY_SIZE {
            return Err(EnvelopeError::DecryptionFailed);
        }

        let mut opening_key = Self {
            key: [0u8; SESSION_KEY_SIZE],
        };
        opening_key.key.copy_from_slice(bytes);
        Ok(opening_key)
    }
}

impl Drop for OpeningKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl ZeroizeOnDrop for OpeningKey {}

impl Debug for OpeningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpeningKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
