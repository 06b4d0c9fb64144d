//! Byte order (endianness) handling
//!
//! WKB geometries and the GeoPackage header prefix are self-describing:
//! each carries a one-byte flag selecting the byte order of the multi-byte
//! fields that follow. This module maps that flag and reads fixed-width
//! scalars from exact-length byte windows.

use crate::error::{Error, Result};

/// Byte-order flag value for big-endian (XDR) data
pub const WKB_XDR: u8 = 0;

/// Byte-order flag value for little-endian (NDR) data
pub const WKB_NDR: u8 = 1;

/// Represents the byte order (endianness) of binary data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (least significant byte first)
    LittleEndian,
    /// Big-endian byte order (most significant byte first)
    BigEndian,
}

impl ByteOrder {
    /// Maps an on-disk WKB byte-order flag to a byte order
    ///
    /// WKB and GeoPackage use 0 for big-endian (XDR) and 1 for
    /// little-endian (NDR). Any other value is invalid.
    pub fn from_wkb_flag(flag: u8) -> Result<Self> {
        match flag {
            WKB_XDR => Ok(ByteOrder::BigEndian),
            WKB_NDR => Ok(ByteOrder::LittleEndian),
            other => Err(Error::InvalidByteOrder(other)),
        }
    }

    /// Reads an unsigned 16-bit integer from an exact 2-byte window
    pub fn read_u16(&self, window: &[u8]) -> Result<u16> {
        let buf: [u8; 2] = window.try_into().map_err(|_| Error::WindowLength {
            expected: 2,
            actual: window.len(),
        })?;
        Ok(match self {
            ByteOrder::LittleEndian => u16::from_le_bytes(buf),
            ByteOrder::BigEndian => u16::from_be_bytes(buf),
        })
    }

    /// Reads an unsigned 32-bit integer from an exact 4-byte window
    pub fn read_u32(&self, window: &[u8]) -> Result<u32> {
        let buf: [u8; 4] = window.try_into().map_err(|_| Error::WindowLength {
            expected: 4,
            actual: window.len(),
        })?;
        Ok(match self {
            ByteOrder::LittleEndian => u32::from_le_bytes(buf),
            ByteOrder::BigEndian => u32::from_be_bytes(buf),
        })
    }

    /// Reads a signed 32-bit integer from an exact 4-byte window
    ///
    /// Bytes are assembled in endian order as two's complement, so the
    /// sign is preserved.
    pub fn read_i32(&self, window: &[u8]) -> Result<i32> {
        let buf: [u8; 4] = window.try_into().map_err(|_| Error::WindowLength {
            expected: 4,
            actual: window.len(),
        })?;
        Ok(match self {
            ByteOrder::LittleEndian => i32::from_le_bytes(buf),
            ByteOrder::BigEndian => i32::from_be_bytes(buf),
        })
    }

    /// Reads a 64-bit IEEE-754 double from an exact 8-byte window
    ///
    /// The window is assembled into a u64 in endian order and the bit
    /// pattern reinterpreted as a double. No rounding takes place.
    pub fn read_f64(&self, window: &[u8]) -> Result<f64> {
        let buf: [u8; 8] = window.try_into().map_err(|_| Error::WindowLength {
            expected: 8,
            actual: window.len(),
        })?;
        let bits = match self {
            ByteOrder::LittleEndian => u64::from_le_bytes(buf),
            ByteOrder::BigEndian => u64::from_be_bytes(buf),
        };
        Ok(f64::from_bits(bits))
    }
}
