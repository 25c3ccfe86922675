//! `EnvelopePublicKey` - Recipient key for sealing envelopes.
//!
//! This module provides the `EnvelopePublicKey` type, an RSA public key used
//! with RSA-OAEP (SHA-256, MGF1-SHA-256) to wrap session keys.
//!
//! Accepted inputs:
//! - `PUBLIC KEY` PEM (SPKI)
//! - SPKI DER
//! - `CERTIFICATE` PEM or DER, with the `x509` feature

use core::fmt::{self, Debug};

use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::armor;
use crate::core::types::KeyFingerprint;

/// An RSA public key for RSA-OAEP/SHA-256 envelope sealing.
///
/// # Example
///
/// ```rust
/// use sealed_envelope::EnvelopePublicKey;
///
/// let pem = include_str!("../../../tests/fixtures/recipient_spki.pem");
/// let key = EnvelopePublicKey::from_pem(pem)?;
/// assert_eq!(key.bits(), 2048);
/// assert_eq!(key.ciphertext_len(), 256);
/// # Ok::<(), sealed_envelope::EnvelopeError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EnvelopePublicKey {
    key: RsaPublicKey,
}

impl EnvelopePublicKey {
    /// PEM label for SPKI public keys.
    pub const PEM_LABEL: &'static str = "PUBLIC KEY";

    /// PEM label for X.509 certificates.
    pub const CERTIFICATE_PEM_LABEL: &'static str = "CERTIFICATE";

    /// Imports a public key from PEM text.
    ///
    /// `PUBLIC KEY` documents are decoded as SPKI. `CERTIFICATE` documents
    /// have their SPKI extracted when the `x509` feature is enabled. Text
    /// before the `BEGIN` line is ignored, and only the first block of a
    /// bundle is read.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` for wrong markers, a non-base64 body,
    /// or DER that is not an RSA public key.
    pub fn from_pem(pem: &str) -> EnvelopeResult<Self> {
        let block = armor::parse(pem)?;
        match block.tag() {
            Self::PEM_LABEL => Self::from_spki_der(block.contents()),
            #[cfg(feature = "x509")]
            Self::CERTIFICATE_PEM_LABEL => Self::from_certificate_der(block.contents()),
            #[cfg(not(feature = "x509"))]
            Self::CERTIFICATE_PEM_LABEL => Err(EnvelopeError::KeyImport(
                "certificate import requires the `x509` feature".to_string(),
            )),
            other => Err(EnvelopeError::KeyImport(format!(
                "unsupported PEM label `{other}`"
            ))),
        }
    }

    /// Imports a public key from SPKI DER bytes.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the DER is not an RSA SPKI.
    pub fn from_spki_der(der: &[u8]) -> EnvelopeResult<Self> {
        let key = RsaPublicKey::from_public_key_der(der)
            .map_err(|e| EnvelopeError::KeyImport(format!("invalid SPKI public key: {e}")))?;
        Ok(Self { key })
    }

    /// Extracts the public key from an X.509 certificate in PEM form.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the PEM, the certificate, or the
    /// embedded key cannot be parsed.
    #[cfg(feature = "x509")]
    pub fn from_certificate_pem(pem: &str) -> EnvelopeResult<Self> {
        Self::from_certificate_der(&armor::decode(pem, Self::CERTIFICATE_PEM_LABEL)?)
    }

    /// Extracts the public key from an X.509 certificate in DER form.
    ///
    /// The certificate is not validated (no chain, expiry, or usage checks);
    /// only its `subjectPublicKeyInfo` is used.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the certificate or the embedded
    /// key cannot be parsed.
    #[cfg(feature = "x509")]
    pub fn from_certificate_der(der: &[u8]) -> EnvelopeResult<Self> {
        use x509_cert::der::{Decode, Encode};
        use x509_cert::Certificate;

        let certificate = Certificate::from_der(der)
            .map_err(|e| EnvelopeError::KeyImport(format!("invalid certificate: {e}")))?;
        let spki = certificate
            .tbs_certificate
            .subject_public_key_info
            .to_der()
            .map_err(|e| EnvelopeError::KeyImport(format!("invalid certificate key: {e}")))?;

        Self::from_spki_der(&spki)
    }

    /// Exports the key as SPKI DER.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if encoding fails.
    pub fn to_spki_der(&self) -> EnvelopeResult<Vec<u8>> {
        let der = self
            .key
            .to_public_key_der()
            .map_err(|_| EnvelopeError::CryptoError)?;
        Ok(der.as_bytes().to_vec())
    }

    /// Exports the key as `PUBLIC KEY` PEM with LF line endings.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if encoding fails.
    pub fn to_pem(&self) -> EnvelopeResult<String> {
        self.key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|_| EnvelopeError::CryptoError)
    }

    /// Returns the SHA-256 fingerprint of the SPKI encoding.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::CryptoError` if encoding fails.
    pub fn fingerprint(&self) -> EnvelopeResult<KeyFingerprint> {
        Ok(KeyFingerprint::from_spki_der(&self.to_spki_der()?))
    }

    /// Returns the modulus size in bits.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.key.n().bits()
    }

    /// Returns the length in bytes of every RSA ciphertext under this key.
    #[must_use]
    pub fn ciphertext_len(&self) -> usize {
        self.key.size()
    }

    /// Returns the underlying RSA key.
    #[must_use]
    pub const fn as_rsa(&self) -> &RsaPublicKey {
        &self.key
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<RsaPublicKey> for EnvelopePublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self { key }
    }
}

impl AsRef<RsaPublicKey> for EnvelopePublicKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.key
    }
}

impl TryFrom<&str> for EnvelopePublicKey {
    type Error = EnvelopeError;

    fn try_from(pem: &str) -> Result<Self, Self::Error> {
        Self::from_pem(pem)
    }
}

impl TryFrom<&[u8]> for EnvelopePublicKey {
    type Error = EnvelopeError;

    fn try_from(der: &[u8]) -> Result<Self, Self::Error> {
        Self::from_spki_der(der)
    }
}

impl Debug for EnvelopePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopePublicKey")
            .field("algorithm", &"RSA-OAEP-SHA256")
            .field("bits", &self.bits())
            .finish()
    }
}
