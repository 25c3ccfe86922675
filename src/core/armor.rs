//! PEM armor decoding.
//!
//! Key material arrives as RFC 7468 text. Explanatory text before the
//! `BEGIN` line is skipped and only the first block is read, so a bundle of
//! certificates yields its leading certificate.

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// Parses the first PEM block in `text`.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyImport` if no well-formed block is found or
/// the block has an empty body.
pub fn parse(text: &str) -> EnvelopeResult<pem::Pem> {
    let block =
        pem::parse(text).map_err(|e| EnvelopeError::KeyImport(format!("invalid PEM armor: {e}")))?;
    if block.contents().is_empty() {
        return Err(EnvelopeError::KeyImport(format!(
            "empty PEM body for `{}`",
            block.tag()
        )));
    }
    Ok(block)
}

/// Parses the first PEM block and checks its label.
///
/// # Arguments
///
/// * `text` - The PEM text
/// * `expected_label` - The label the block must carry (e.g. "PUBLIC KEY")
///
/// # Returns
///
/// The DER bytes of the body.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyImport` if the block is malformed or carries
/// another label.
pub fn decode(text: &str, expected_label: &str) -> EnvelopeResult<Vec<u8>> {
    let block = parse(text)?;
    if block.tag() != expected_label {
        return Err(EnvelopeError::KeyImport(format!(
            "expected PEM label `{expected_label}`, found `{}`",
            block.tag()
        )));
    }
    Ok(block.into_contents())
}
