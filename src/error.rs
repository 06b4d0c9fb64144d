//! Error types for vectorkit

use std::fmt;

/// Result type for vectorkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in vectorkit operations
#[derive(Debug)]
pub enum Error {
    /// Scalar read window had the wrong length
    WindowLength {
        /// Bytes the read required
        expected: usize,
        /// Bytes the window actually held
        actual: usize,
    },

    /// Input ended before a required field
    Truncated {
        /// Bytes the decode needed
        needed: usize,
        /// Bytes that were available
        available: usize,
    },

    /// Invalid byte-order flag
    InvalidByteOrder(u8),

    /// Invalid envelope-type code in a GeoPackage header
    InvalidEnvelopeType(u8),

    /// Geometry type code did not match the expected tag
    GeometryTypeMismatch {
        /// Type code the context required
        expected: u32,
        /// Type code actually decoded
        found: u32,
    },

    /// Recognized but unsupported geometry type code
    UnsupportedGeometryType(u32),

    /// No map registered under the given name
    MapNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowLength { expected, actual } => {
                write!(f, "Need {} bytes, received {}", expected, actual)
            }
            Error::Truncated { needed, available } => {
                write!(f, "Truncated input: need {} bytes, have {}", needed, available)
            }
            Error::InvalidByteOrder(flag) => {
                write!(f, "Invalid byte order flag: {}", flag)
            }
            Error::InvalidEnvelopeType(code) => {
                write!(f, "Invalid envelope type: {}", code)
            }
            Error::GeometryTypeMismatch { expected, found } => {
                write!(f, "Expected geometry type flag {}, got {}", expected, found)
            }
            Error::UnsupportedGeometryType(code) => {
                write!(f, "Unimplemented or invalid geometry type: {}", code)
            }
            Error::MapNotFound(name) => {
                write!(f, "No map named: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::WindowLength {
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Need 4 bytes, received 2");
    }

    #[test]
    fn test_unsupported_geometry_type() {
        let err = Error::UnsupportedGeometryType(99);
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_invalid_byte_order() {
        let err = Error::InvalidByteOrder(2);
        assert!(err.to_string().contains("2"));
    }

    #[test]
    fn test_map_not_found() {
        let err = Error::MapNotFound("does-not-exist".to_string());
        assert!(err.to_string().contains("does-not-exist"));
    }
}
