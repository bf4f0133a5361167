//! Format detection from magic bytes and file extensions.

use std::fmt;
use std::path::Path;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Image formats the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// Anything else.
    Unknown,
}

impl Format {
    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            _ => Format::Unknown,
        }
    }

    /// Detects format from the leading bytes of a file.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Format::Png
        } else {
            Format::Unknown
        }
    }

    /// Magic bytes first, extension as fallback.
    pub fn detect<P: AsRef<Path>>(path: P, head: &[u8]) -> Self {
        match Self::from_bytes(head) {
            Format::Unknown => Self::from_extension(path),
            known => known,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Png => f.write_str("PNG"),
            Format::Unknown => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("a/b/shot.PNG"), Format::Png);
        assert_eq!(Format::from_extension("shot.jpg"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(Format::from_bytes(&PNG_SIGNATURE), Format::Png);
        assert_eq!(Format::from_bytes(&[0xFF, 0xD8, 0xFF]), Format::Unknown);
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_magic_wins_over_extension() {
        assert_eq!(Format::detect("misnamed.jpg", &PNG_SIGNATURE), Format::Png);
        assert_eq!(Format::detect("empty.png", &[]), Format::Png);
    }
}
