//! `Sealer` - Text-oriented envelope sealing.
//!
//! A [`Sealer`] binds a [`CryptoProvider`] to a [`PlaintextEncoding`], so
//! callers hand it `&str` secrets and get text back on the other side.

use zeroize::Zeroizing;

use crate::core::encoding::PlaintextEncoding;
use crate::core::error::EnvelopeResult;
use crate::core::operations::hybrid;
use crate::core::provider::{CryptoProvider, RustCryptoProvider};
use crate::core::types::{Envelope, EnvelopePrivateKey, EnvelopePublicKey};

/// Seals and opens text secrets.
///
/// # Example
///
/// ```rust
/// use sealed_envelope::{EnvelopePrivateKey, Sealer};
///
/// let secret = EnvelopePrivateKey::from_pem(include_str!("../../tests/fixtures/recipient_pkcs8.pem"))?;
/// let sealer = Sealer::new();
///
/// let envelope = sealer.encrypt(&secret.public_key(), "Bonjour le monde", "")?;
/// assert_eq!(envelope.encoded_len(), 290);
/// assert_eq!(sealer.decrypt(&secret, &envelope, "")?, "Bonjour le monde");
/// # Ok::<(), sealed_envelope::EnvelopeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sealer<P: CryptoProvider = RustCryptoProvider> {
    provider: P,
    encoding: PlaintextEncoding,
}

impl Sealer {
    /// Creates a sealer with the default provider and UTF-8 plaintexts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: CryptoProvider> Sealer<P> {
    /// Creates a sealer with an explicit provider and encoding.
    #[must_use]
    pub const fn with_provider(provider: P, encoding: PlaintextEncoding) -> Self {
        Self { provider, encoding }
    }

    /// Returns the cryptographic backend.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the plaintext encoding.
    #[must_use]
    pub const fn encoding(&self) -> PlaintextEncoding {
        self.encoding
    }

    /// Imports a recipient key through the provider.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyImport` if the PEM cannot be parsed.
    pub fn import_public_key(&self, pem: &str) -> EnvelopeResult<EnvelopePublicKey> {
        self.provider.import_public_key(pem)
    }

    /// Encodes `plaintext` and seals it for `recipient`.
    ///
    /// # Errors
    ///
    /// See [`hybrid::encrypt_with`].
    pub fn encrypt(
        &self,
        recipient: &EnvelopePublicKey,
        plaintext: &str,
        label: &str,
    ) -> EnvelopeResult<Envelope> {
        let encoded = Zeroizing::new(self.encoding.encode(plaintext));
        hybrid::encrypt_with(&self.provider, recipient, &encoded, label)
    }

    /// Opens `envelope` and decodes the plaintext.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::InvalidPlaintext` if the opened bytes are not
    /// valid in the configured encoding; otherwise see [`hybrid::decrypt_with`].
    pub fn decrypt(
        &self,
        recipient: &EnvelopePrivateKey,
        envelope: &Envelope,
        label: &str,
    ) -> EnvelopeResult<String> {
        let opened = Zeroizing::new(hybrid::decrypt_with(
            &self.provider,
            recipient,
            envelope,
            label,
        )?);
        self.encoding.decode(&opened)
    }

    /// Seals `plaintext` and returns the envelope as standard base64.
    ///
    /// # Errors
    ///
    /// See [`Sealer::encrypt`].
    pub fn encrypt_to_base64(
        &self,
        recipient: &EnvelopePublicKey,
        plaintext: &str,
        label: &str,
    ) -> EnvelopeResult<String> {
        self.encrypt(recipient, plaintext, label)
            .map(|envelope| envelope.to_base64())
    }

    /// Opens a base64-encoded envelope.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::Base64Decode` or
    /// `EnvelopeError::MalformedEnvelope` for unparseable input; otherwise see
    /// [`Sealer::decrypt`].
    pub fn decrypt_base64(
        &self,
        recipient: &EnvelopePrivateKey,
        encoded: &str,
        label: &str,
    ) -> EnvelopeResult<String> {
        let envelope = Envelope::from_base64(encoded)?;
        self.decrypt(recipient, &envelope, label)
    }
}
