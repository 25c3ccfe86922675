//! Hybrid RSA-OAEP / AES-256-GCM envelopes for sealed secrets.
//!
//! This crate seals arbitrary-length secrets for the holder of an RSA private
//! key, using the envelope format understood by Kubernetes sealed-secrets
//! controllers. A fresh AES-256 key encrypts the payload; RSA-OAEP wraps that
//! key under the recipient's public key, bound to a caller-chosen label.
//!
//! # Quick Start
//!
//! ```rust
//! use sealed_envelope::{decrypt, encrypt, import_public_key, EnvelopePrivateKey};
//!
//! let public = import_public_key(include_str!("../tests/fixtures/recipient_spki.pem"))?;
//! let sealed = encrypt(&public, b"Bonjour le monde", "")?;
//! assert_eq!(sealed.len(), 290);
//!
//! let secret = EnvelopePrivateKey::from_pem(include_str!("../tests/fixtures/recipient_pkcs8.pem"))?;
//! assert_eq!(decrypt(&secret, &sealed, "")?, b"Bonjour le monde");
//! # Ok::<(), sealed_envelope::EnvelopeError>(())
//! ```
//!
//! # Wire Format
//!
//! | Offset | Length | Content |
//! |--------|--------|---------|
//! | 0 | 2 | `N`, little-endian `u16` |
//! | 2 | `N` | RSA-OAEP(SHA-256) ciphertext of the 32-byte AES key |
//! | 2 + `N` | rest | AES-256-GCM ciphertext and 16-byte tag, all-zero nonce |
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! sealed-envelope = "0.1"                                               # prelude + x509 (default)
//! sealed-envelope = { version = "0.1", default-features = false }        # core only
//! ```
//!
//! - `prelude` - [`prelude::SealerBuilder`] and [`prelude::SealingScope`]
//! - `x509` - Import recipient keys from X.509 certificates
//!
//! # Security
//!
//! - Session keys are single-use by construction and zeroized on drop
//! - Debug output redacts key material
//! - Decryption fails closed with deliberately vague errors
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::encoding::PlaintextEncoding;
pub use crate::core::error::{EnvelopeError, EnvelopeResult};
pub use crate::core::operations::hybrid::{decrypt, decrypt_with, encrypt, encrypt_with};
pub use crate::core::provider::{CryptoProvider, RustCryptoProvider};
pub use crate::core::sealer::Sealer;
pub use crate::core::types::{
    Envelope, EnvelopePrivateKey, EnvelopePublicKey, KeyFingerprint, OpeningKey, SessionKey,
};

/// Imports a recipient public key from `PUBLIC KEY` (or, with `x509`,
/// `CERTIFICATE`) PEM text.
///
/// # Errors
///
/// Returns [`EnvelopeError::KeyImport`] if the PEM cannot be parsed.
pub fn import_public_key(pem: &str) -> EnvelopeResult<EnvelopePublicKey> {
    EnvelopePublicKey::from_pem(pem)
}
