//! Length-prefix framing for envelopes.
//!
//! An envelope is laid out as:
//!
//! ```text
//! offset 0   : u16 little-endian N   (RSA-OAEP ciphertext length)
//! offset 2   : N bytes                RSA-OAEP ciphertext (wrapped session key)
//! offset 2+N : remaining bytes        AES-GCM ciphertext || tag
//! ```

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// Size of the length prefix in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Largest wrapped-key length the prefix can describe.
pub const MAX_WRAPPED_KEY_LEN: usize = u16::MAX as usize;

/// Encodes a wrapped-key length as a 2-byte little-endian prefix.
///
/// # Errors
///
/// Returns `EnvelopeError::SizeOverflow` if `len` does not fit in 16 bits.
pub fn encode_length(len: usize) -> EnvelopeResult<[u8; LENGTH_PREFIX_SIZE]> {
    let len16 = u16::try_from(len).map_err(|_| EnvelopeError::SizeOverflow { len })?;
    Ok(len16.to_le_bytes())
}

/// Decodes the length prefix from the first two bytes of `buf`.
///
/// Bytes after the prefix are ignored.
///
/// # Errors
///
/// Returns `EnvelopeError::MalformedEnvelope` if `buf` is shorter than the prefix.
pub fn decode_length(buf: &[u8]) -> EnvelopeResult<u16> {
    match buf {
        [lo, hi, ..] => Ok(u16::from_le_bytes([*lo, *hi])),
        _ => Err(EnvelopeError::MalformedEnvelope {
            needed: LENGTH_PREFIX_SIZE,
            actual: buf.len(),
        }),
    }
}

/// Frames a wrapped key and a payload into a single buffer.
///
/// # Errors
///
/// Returns `EnvelopeError::SizeOverflow` if the wrapped key is longer than
/// [`MAX_WRAPPED_KEY_LEN`].
pub fn join(wrapped_key: &[u8], payload: &[u8]) -> EnvelopeResult<Vec<u8>> {
    let prefix = encode_length(wrapped_key.len())?;

    let mut out = Vec::with_capacity(LENGTH_PREFIX_SIZE + wrapped_key.len() + payload.len());
    out.extend_from_slice(&prefix);
    out.extend_from_slice(wrapped_key);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Splits a framed buffer into `(wrapped_key, payload)`.
///
/// # Errors
///
/// Returns `EnvelopeError::MalformedEnvelope` if the buffer is shorter than
/// `2 + N`, where `N` is the declared wrapped-key length.
pub fn split(buf: &[u8]) -> EnvelopeResult<(&[u8], &[u8])> {
    let declared = usize::from(decode_length(buf)?);
    let needed = LENGTH_PREFIX_SIZE + declared;

    if buf.len() < needed {
        tracing::trace!(needed, actual = buf.len(), "envelope shorter than its frame");
        return Err(EnvelopeError::MalformedEnvelope {
            needed,
            actual: buf.len(),
        });
    }

    let body = &buf[LENGTH_PREFIX_SIZE..];
    Ok(body.split_at(declared))
}
