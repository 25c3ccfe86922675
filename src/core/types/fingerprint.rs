//! `KeyFingerprint` - Public key identifier.
//!
//! A fingerprint is the SHA-256 digest of the key's SPKI DER encoding, so
//! the same key yields the same fingerprint no matter whether it was read
//! from a PEM file, raw DER, or an X.509 certificate.

use core::fmt::{self, Debug, Display};

use sha2::{Digest, Sha256};

/// Fingerprint size in bytes.
pub const FINGERPRINT_SIZE: usize = 32;

/// SHA-256 fingerprint of an SPKI-encoded public key.
///
/// # Example
///
/// ```rust
/// use sealed_envelope::KeyFingerprint;
///
/// let fingerprint = KeyFingerprint::from_spki_der(b"not really DER");
/// assert_eq!(fingerprint.to_string().len(), 64);
/// ```
#[derive(Clone, Copy)]
pub struct KeyFingerprint([u8; FINGERPRINT_SIZE]);

impl KeyFingerprint {
    /// Computes the fingerprint of SPKI DER bytes.
    #[must_use]
    pub fn from_spki_der(spki_der: &[u8]) -> Self {
        Self(Sha256::digest(spki_der).into())
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }
}

impl Display for KeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Debug for KeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyFingerprint({self})")
    }
}

impl PartialEq for KeyFingerprint {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for KeyFingerprint {}

impl AsRef<[u8]> for KeyFingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
