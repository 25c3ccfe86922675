//! `Envelope` - The sealed wire message.
//!
//! Layout:
//!
//! ```text
//! +----------------+----------------------------+-----------------------------+
//! | u16 LE  (2 B)  | RSA-OAEP wrapped key (N B) | AES-256-GCM ct || tag (16 B) |
//! +----------------+----------------------------+-----------------------------+
//! ```
//!
//! `N` is the recipient's RSA modulus size in bytes. Parsing only checks
//! the framing; cryptographic checks happen on decrypt.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::framing;

/// A framed hybrid envelope.
///
/// The serialized bytes are kept as-is; the accessors slice into them.
///
/// # Example
///
/// ```rust
/// use sealed_envelope::Envelope;
///
/// let envelope = Envelope::new(&[0xAA; 4], &[0xBB; 3])?;
/// assert_eq!(envelope.as_bytes(), [4, 0, 0xAA, 0xAA, 0xAA, 0xAA, 0xBB, 0xBB, 0xBB]);
///
/// let parsed = Envelope::try_from(envelope.as_bytes())?;
/// assert_eq!(parsed, envelope);
/// # Ok::<(), sealed_envelope::EnvelopeError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    bytes: Vec<u8>,
    wrapped_key_len: usize,
}

impl Envelope {
    /// Frames a wrapped key and a payload into an envelope.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::SizeOverflow` if the wrapped key is longer
    /// than 65535 bytes.
    pub fn new(wrapped_key: &[u8], payload: &[u8]) -> EnvelopeResult<Self> {
        Ok(Self {
            bytes: framing::join(wrapped_key, payload)?,
            wrapped_key_len: wrapped_key.len(),
        })
    }

    /// Returns the RSA-OAEP ciphertext of the session key.
    #[must_use]
    pub fn wrapped_key(&self) -> &[u8] {
        let end = framing::LENGTH_PREFIX_SIZE + self.wrapped_key_len;
        &self.bytes[framing::LENGTH_PREFIX_SIZE..end]
    }

    /// Returns the AES-GCM ciphertext including its trailing tag.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[framing::LENGTH_PREFIX_SIZE + self.wrapped_key_len..]
    }

    /// Returns the serialized length in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the serialized envelope.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a copy of the serialized envelope.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Returns the serialized envelope, consuming it.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Encodes the serialized envelope as standard padded base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.bytes)
    }

    /// Parses an envelope from standard base64.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::Base64Decode` for invalid base64, or
    /// `EnvelopeError::MalformedEnvelope` if the decoded bytes are too short.
    pub fn from_base64(encoded: &str) -> EnvelopeResult<Self> {
        let bytes = BASE64_STANDARD.decode(encoded.trim())?;
        Self::try_from(bytes)
    }
}

impl TryFrom<Vec<u8>> for Envelope {
    type Error = EnvelopeError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let (wrapped_key, _) = framing::split(&bytes)?;
        let wrapped_key_len = wrapped_key.len();
        Ok(Self {
            bytes,
            wrapped_key_len,
        })
    }
}

impl TryFrom<&[u8]> for Envelope {
    type Error = EnvelopeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from(bytes.to_vec())
    }
}

impl TryFrom<&str> for Envelope {
    type Error = EnvelopeError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        Self::from_base64(encoded)
    }
}

impl From<Envelope> for Vec<u8> {
    fn from(envelope: Envelope) -> Self {
        envelope.into_bytes()
    }
}

impl Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("wrapped_key_len", &self.wrapped_key_len)
            .field("payload_len", &self.payload().len())
            .finish()
    }
}
