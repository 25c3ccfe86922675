//! Envelope type implementations.
//!
//! - [`EnvelopePublicKey`] - RSA recipient key for sealing
//! - [`EnvelopePrivateKey`] - RSA recipient key for opening
//! - [`KeyFingerprint`] - SHA-256 identifier of a public key
//! - [`SessionKey`] / [`OpeningKey`] - Single-use AES-256-GCM keys
//! - [`Envelope`] - The framed wire message

mod envelope;
mod fingerprint;
mod public;
mod secret;
mod session_key;

pub use envelope::Envelope;
pub use fingerprint::{KeyFingerprint, FINGERPRINT_SIZE};
pub use public::EnvelopePublicKey;
pub use secret::EnvelopePrivateKey;
pub use session_key::{OpeningKey, SessionKey, SESSION_KEY_SIZE};
