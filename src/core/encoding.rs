//! Plaintext text encodings.
//!
//! The envelope payload is opaque bytes. Text plaintexts must be turned into
//! bytes the same way on both ends, and two incompatible conventions exist in
//! the wild:
//!
//! - [`PlaintextEncoding::Utf8`]: standard UTF-8 bytes. This is what the
//!   sealed-secrets controller expects and is the default.
//! - [`PlaintextEncoding::Utf16Le`]: two bytes per UTF-16 code unit,
//!   little-endian. Produced by older browser implementations that copied
//!   `charCodeAt` values into a `Uint16Array`.
//!
//! The choice is a wire-compatibility decision and is never guessed.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// How text plaintexts are converted to and from payload bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaintextEncoding {
    /// Standard UTF-8.
    #[default]
    Utf8,
    /// UTF-16 code units, little-endian, no BOM.
    Utf16Le,
}

impl PlaintextEncoding {
    /// Canonical label of this encoding (e.g. "UTF-8").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
        }
    }

    /// Encodes text into payload bytes.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    /// Decodes payload bytes into text.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::InvalidPlaintext` if the bytes are not valid in
    /// this encoding (invalid UTF-8, odd length, or unpaired surrogates).
    pub fn decode(&self, bytes: &[u8]) -> EnvelopeResult<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|_| EnvelopeError::InvalidPlaintext(*self)),
            Self::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(EnvelopeError::InvalidPlaintext(*self));
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|_| EnvelopeError::InvalidPlaintext(*self))
            }
        }
    }
}

impl Display for PlaintextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaintextEncoding {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16le" | "utf16le" | "utf-16" | "utf16" => Ok(Self::Utf16Le),
            _ => Err(EnvelopeError::UnsupportedEncoding(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(PlaintextEncoding::default(), PlaintextEncoding::Utf8);
    }

    #[test]
    fn test_utf8_encode() {
        let bytes = PlaintextEncoding::Utf8.encode("Bonjour le monde");
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes, b"Bonjour le monde");
    }

    #[test]
    fn test_utf16le_encode() {
        let bytes = PlaintextEncoding::Utf16Le.encode("Bon");
        assert_eq!(bytes, [b'B', 0, b'o', 0, b'n', 0]);

        // One code unit per BMP character, two for astral characters.
        assert_eq!(PlaintextEncoding::Utf16Le.encode("é").len(), 2);
        assert_eq!(PlaintextEncoding::Utf16Le.encode("🦀").len(), 4);
    }

    #[test]
    fn test_decode_roundtrip() -> EnvelopeResult<()> {
        let text = "héllo wörld ✓ 🦀";
        for encoding in [PlaintextEncoding::Utf8, PlaintextEncoding::Utf16Le] {
            assert_eq!(encoding.decode(&encoding.encode(text))?, text);
        }
        Ok(())
    }

    #[test]
    fn test_decode_empty() -> EnvelopeResult<()> {
        assert_eq!(PlaintextEncoding::Utf8.decode(&[])?, "");
        assert_eq!(PlaintextEncoding::Utf16Le.decode(&[])?, "");
        Ok(())
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let result = PlaintextEncoding::Utf8.decode(&[0xff, 0xfe]);
        assert!(matches!(
            result,
            Err(EnvelopeError::InvalidPlaintext(PlaintextEncoding::Utf8))
        ));
    }

    #[test]
    fn test_decode_odd_length_utf16() {
        let result = PlaintextEncoding::Utf16Le.decode(&[b'a', 0, b'b']);
        assert!(matches!(
            result,
            Err(EnvelopeError::InvalidPlaintext(PlaintextEncoding::Utf16Le))
        ));
    }

    #[test]
    fn test_decode_unpaired_surrogate() {
        let result = PlaintextEncoding::Utf16Le.decode(&[0x00, 0xd8]);
        assert!(matches!(result, Err(EnvelopeError::InvalidPlaintext(_))));
    }

    #[test]
    fn test_encodings_disagree() {
        let utf16 = PlaintextEncoding::Utf16Le.encode("Bonjour");
        // UTF-16LE bytes of ASCII text are valid UTF-8, just not the same text.
        let misread = PlaintextEncoding::Utf8.decode(&utf16);
        assert!(matches!(misread, Ok(ref s) if s != "Bonjour"));
    }

    #[test]
    fn test_from_str() -> EnvelopeResult<()> {
        assert_eq!("utf-8".parse::<PlaintextEncoding>()?, PlaintextEncoding::Utf8);
        assert_eq!("UTF8".parse::<PlaintextEncoding>()?, PlaintextEncoding::Utf8);
        assert_eq!(
            "UTF-16LE".parse::<PlaintextEncoding>()?,
            PlaintextEncoding::Utf16Le
        );
        assert!(matches!(
            "latin1".parse::<PlaintextEncoding>(),
            Err(EnvelopeError::UnsupportedEncoding(name)) if name == "latin1"
        ));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(PlaintextEncoding::Utf8.to_string(), "UTF-8");
        assert_eq!(PlaintextEncoding::Utf16Le.to_string(), "UTF-16LE");
    }
}
