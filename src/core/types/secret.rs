//! `EnvelopePrivateKey` - Recipient key for opening envelopes.
//!
//! Accepts `PRIVATE KEY` (PKCS#8) and `RSA PRIVATE KEY` (PKCS#1) documents.

use core::fmt::{self, Debug};

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use zeroize::Zeroizing;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::armor;
use crate::core::types::EnvelopePublicKey;

/// An RSA private key for opening envelopes.
///
/// # Security
///
/// - The `rsa` crate zeroizes the key material on drop
/// - Debug output redacts the key
///
/// # Example
///
/// ```rust
/// use sealed_envelope::EnvelopePrivateKey;
///
/// let pem = include_str!("../../../tests/fixtures/recipient_pkcs8.pem");
/// let key = EnvelopePrivateKey::from_pem(pem)?;
/// assert_eq!(key.bits(), 2048);
/// # Ok::<(), sealed_envelope::EnvelopeError>(())
/// ```
#[derive(Clone)]
pub struct EnvelopePrivateKey {
    key: RsaPrivateKey,
}

impl EnvelopePrivateKey {
    /// PEM label for PKCS#8 private keys.
    pub const PKCS8_PEM_LABEL: &'static str = "PRIVATE KEY";

    /// PEM label for PKCS#1 RSA private keys.
    pub const PKCS1_PEM_LABEL: &'static str = "RSA PRIVATE KEY";

    /// Imports a private key from PEM text.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the markers, body, or key
    /// structure are invalid.
    pub fn from_pem(pem: &str) -> EnvelopeResult<Self> {
        let block = armor::parse(pem)?;
        let label = block.tag().to_string();
        let der = Zeroizing::new(block.into_contents());
        match label.as_str() {
            Self::PKCS8_PEM_LABEL => Self::from_pkcs8_der(&der),
            Self::PKCS1_PEM_LABEL => Self::from_pkcs1_der(&der),
            other => Err(EnvelopeError::KeyImport(format!(
                "unsupported PEM label `{other}`"
            ))),
        }
    }

    /// Imports a private key from PKCS#8 DER.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the DER is not an RSA PKCS#8 key.
    pub fn from_pkcs8_der(der: &[u8]) -> EnvelopeResult<Self> {
        let key = RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| EnvelopeError::KeyImport(format!("invalid PKCS#8 private key: {e}")))?;
        Ok(Self { key })
    }

    /// Imports a private key from PKCS#1 DER.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the DER is not a PKCS#1 RSA key.
    pub fn from_pkcs1_der(der: &[u8]) -> EnvelopeResult<Self> {
        let key = RsaPrivateKey::from_pkcs1_der(der)
            .map_err(|e| EnvelopeError::KeyImport(format!("invalid PKCS#1 private key: {e}")))?;
        Ok(Self { key })
    }

    /// Returns the matching public key.
    #[must_use]
    pub fn public_key(&self) -> EnvelopePublicKey {
        EnvelopePublicKey::from(self.key.to_public_key())
    }

    /// Returns the modulus size in bits.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.key.n().bits()
    }

    /// Returns the length in bytes of every RSA ciphertext for this key.
    #[must_use]
    pub fn ciphertext_len(&self) -> usize {
        self.key.size()
    }

    /// Returns the underlying RSA key.
    #[must_use]
    pub const fn as_rsa(&self) -> &RsaPrivateKey {
        &self.key
    }
}

impl From<RsaPrivateKey> for EnvelopePrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self { key }
    }
}

impl TryFrom<&str> for EnvelopePrivateKey {
    type Error = EnvelopeError;

    fn try_from(pem: &str) -> Result<Self, Self::Error> {
        Self::from_pem(pem)
    }
}

impl Debug for EnvelopePrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopePrivateKey")
            .field("bits", &self.bits())
            .field("key", &"[REDACTED]")
            .finish()
    }
}
