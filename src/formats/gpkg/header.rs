//! GeoPackage binary header parsing
//!
//! A GeoPackage geometry blob starts with a small self-describing header
//! followed by a plain WKB geometry:
//!
//! - byte 0-1: magic, `0x47 0x50` ("GP") in the header byte order
//! - byte 2: version
//! - byte 3: flags (bit 0 byte order, bits 1-3 envelope type, bit 4 empty
//!   geometry, bits 5-7 reserved)
//! - byte 4-7: SRS id (int32)
//! - byte 8..: 0, 4, 6, or 8 envelope doubles depending on envelope type
//!
//! The flags byte must be read first: it selects the byte order used to
//! interpret every other multi-byte field.

use tracing::warn;

use crate::error::{Error, Result};
use crate::io::ByteOrder;
use crate::types::Bounds;

/// Magic number of a well-formed GeoPackage blob ("GP")
pub const GPKG_MAGIC: u16 = 0x4750;

/// Length of the fixed header prefix before the optional envelope
const PREFIX_LEN: usize = 8;

/// Highest SRS id the byte-order probe treats as plausible
const SRS_ID_PLAUSIBLE_MAX: i32 = 9999;

/// Parsed GeoPackage binary header
///
/// The header's byte length depends on its envelope type; [`size`] reports
/// the exact length so the WKB payload following it can be located.
///
/// [`size`]: GpkgHeader::size
#[derive(Debug, Clone)]
pub struct GpkgHeader {
    magic: u16,
    version: u8,
    flags: u8,
    srs_id: i32,
    envelope: Vec<f64>,
    size: usize,
}

impl GpkgHeader {
    /// Decodes the header at the front of a GeoPackage geometry blob
    ///
    /// Any byte-order flag or envelope-type code outside its valid set
    /// aborts the decode; a partial header is never returned.
    pub fn decode(blob: &[u8]) -> Result<Self> {
        if blob.len() < PREFIX_LEN {
            return Err(Error::Truncated {
                needed: PREFIX_LEN,
                available: blob.len(),
            });
        }

        // The flags byte sits at a fixed offset and selects the byte order
        // for the rest of the header, so it is read first.
        let flags = blob[3];
        let order = ByteOrder::from_wkb_flag(flags & 0x01)?;

        let magic = order.read_u16(&blob[0..2])?;
        let version = blob[2];
        let srs_id = probe_srs_id(&blob[4..8])?;

        let envelope_len = match envelope_type_from_flags(flags) {
            0 => 0,
            1 => 4,
            2 | 3 => 6,
            4 => 8,
            other => return Err(Error::InvalidEnvelopeType(other)),
        };

        let size = PREFIX_LEN + envelope_len * 8;
        if blob.len() < size {
            return Err(Error::Truncated {
                needed: size,
                available: blob.len(),
            });
        }

        let mut envelope = Vec::with_capacity(envelope_len);
        for i in 0..envelope_len {
            let start = PREFIX_LEN + i * 8;
            envelope.push(order.read_f64(&blob[start..start + 8])?);
        }

        Ok(Self {
            magic,
            version,
            flags,
            srs_id,
            envelope,
            size,
        })
    }

    /// Returns the magic number as decoded in the header byte order
    ///
    /// Well-formed blobs carry [`GPKG_MAGIC`]; the value is exposed as-is
    /// and never validated here.
    pub fn magic(&self) -> u16 {
        self.magic
    }

    /// Returns the header version byte
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the raw flags byte
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns the spatial reference system id
    pub fn srs_id(&self) -> i32 {
        self.srs_id
    }

    /// Returns the envelope-type code (0-4)
    ///
    /// 0: no envelope; 1: [minx, maxx, miny, maxy]; 2: xy + z range;
    /// 3: xy + m range; 4: xy + z and m ranges.
    pub fn envelope_type(&self) -> u8 {
        envelope_type_from_flags(self.flags)
    }

    /// Returns the envelope doubles in on-disk order
    pub fn envelope(&self) -> &[f64] {
        &self.envelope
    }

    /// Returns whether the empty-geometry flag bit is set
    pub fn is_empty_geometry(&self) -> bool {
        self.flags & 0x10 != 0
    }

    /// Returns the XY extent of the envelope, if one is present
    ///
    /// Allows spatial filtering without decoding the geometry payload.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.envelope.len() < 4 {
            return None;
        }
        Some(Bounds::new(
            self.envelope[0],
            self.envelope[2],
            self.envelope[1],
            self.envelope[3],
        ))
    }

    /// Returns the exact byte length of this header within its blob
    ///
    /// The WKB geometry payload starts at this offset.
    pub fn size(&self) -> usize {
        self.size
    }
}

fn envelope_type_from_flags(flags: u8) -> u8 {
    (flags & 0x0E) >> 1
}

/// Decodes the SRS id with the legacy dual-byte-order probe
///
/// This is a best-effort heuristic, not a protocol rule: the field is read
/// little-endian first and retried big-endian when the value falls outside
/// [0, 9999]. When both attempts are implausible the id is forced to 0 and
/// a warning is logged. A plausible value is not guaranteed to have been
/// decoded with the byte order the writer used.
fn probe_srs_id(window: &[u8]) -> Result<i32> {
    let little = ByteOrder::LittleEndian.read_i32(window)?;
    if srs_id_plausible(little) {
        return Ok(little);
    }

    let big = ByteOrder::BigEndian.read_i32(window)?;
    if srs_id_plausible(big) {
        warn!(
            srs_id = big,
            rejected = little,
            "srs_id only plausible when decoded big-endian"
        );
        return Ok(big);
    }

    warn!(
        little_endian = little,
        big_endian = big,
        "srs_id implausible in both byte orders, defaulting to 0"
    );
    Ok(0)
}

fn srs_id_plausible(srs_id: i32) -> bool {
    (0..=SRS_ID_PLAUSIBLE_MAX).contains(&srs_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a little-endian header blob with the given envelope type
    fn header_bytes(envelope_type: u8, srs_id: i32, envelope: &[f64]) -> Vec<u8> {
        let flags = 0x01 | (envelope_type << 1);
        let mut bytes = vec![0x47, 0x50, 0x00, flags];
        bytes.extend_from_slice(&srs_id.to_le_bytes());
        for value in envelope {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_header_size_per_envelope_type() {
        let cases = [(0u8, 0usize, 8usize), (1, 4, 40), (2, 6, 56), (3, 6, 56), (4, 8, 72)];
        for (envelope_type, doubles, expected_size) in cases {
            let blob = header_bytes(envelope_type, 4326, &vec![0.0; doubles]);
            let header = GpkgHeader::decode(&blob).unwrap();
            assert_eq!(header.size(), expected_size);
            assert_eq!(header.envelope_type(), envelope_type);
            assert_eq!(header.envelope().len(), doubles);
        }
    }

    #[test]
    fn test_magic_little_endian() {
        // Byte-order bit set: the two magic bytes are interpreted
        // little-endian, so 0x50 0x47 reads back as 0x4750.
        let blob = vec![0x50, 0x47, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.magic(), GPKG_MAGIC);
    }

    #[test]
    fn test_magic_big_endian() {
        let blob = vec![0x47, 0x50, 0x00, 0x00, 0x00, 0x00, 0x10, 0xE6];
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.magic(), GPKG_MAGIC);
    }

    #[test]
    fn test_version() {
        let mut blob = header_bytes(0, 0, &[]);
        blob[2] = 0x07;
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.version(), 7);
    }

    #[test]
    fn test_srs_id_plain_little_endian() {
        let blob = header_bytes(0, 3857, &[]);
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.srs_id(), 3857);
    }

    #[test]
    fn test_srs_id_retries_big_endian() {
        // 0x000010E6: implausible read little-endian, 4326 read big-endian.
        let mut blob = header_bytes(0, 0, &[]);
        blob[4..8].copy_from_slice(&4326i32.to_be_bytes());
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.srs_id(), 4326);
    }

    #[test]
    fn test_srs_id_defaults_to_zero() {
        // -1 in either byte order, implausible both ways.
        let mut blob = header_bytes(0, 0, &[]);
        blob[4..8].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.srs_id(), 0);
    }

    #[test]
    fn test_envelope_values() {
        let blob = header_bytes(1, 4326, &[-180.0, 180.0, -90.0, 90.0]);
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.envelope(), &[-180.0, 180.0, -90.0, 90.0]);
    }

    #[test]
    fn test_envelope_big_endian() {
        // Byte-order bit clear, envelope type 1.
        let flags = 1 << 1;
        let mut blob = vec![0x47, 0x50, 0x00, flags];
        blob.extend_from_slice(&4326i32.to_be_bytes());
        for value in [1.0f64, 2.0, 3.0, 4.0] {
            blob.extend_from_slice(&value.to_be_bytes());
        }
        let header = GpkgHeader::decode(&blob).unwrap();
        assert_eq!(header.envelope(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_bounds_from_envelope() {
        // Envelope order is [minx, maxx, miny, maxy].
        let blob = header_bytes(1, 4326, &[-180.0, 180.0, -90.0, 90.0]);
        let header = GpkgHeader::decode(&blob).unwrap();
        let bounds = header.bounds().unwrap();
        assert_eq!(bounds.min_x, -180.0);
        assert_eq!(bounds.max_x, 180.0);
        assert_eq!(bounds.min_y, -90.0);
        assert_eq!(bounds.max_y, 90.0);
    }

    #[test]
    fn test_no_bounds_without_envelope() {
        let blob = header_bytes(0, 4326, &[]);
        let header = GpkgHeader::decode(&blob).unwrap();
        assert!(header.bounds().is_none());
    }

    #[test]
    fn test_empty_geometry_flag() {
        let mut blob = header_bytes(0, 4326, &[]);
        blob[3] |= 0x10;
        let header = GpkgHeader::decode(&blob).unwrap();
        assert!(header.is_empty_geometry());

        let blob = header_bytes(0, 4326, &[]);
        let header = GpkgHeader::decode(&blob).unwrap();
        assert!(!header.is_empty_geometry());
    }

    #[test]
    fn test_invalid_envelope_type() {
        for envelope_type in 5..=7u8 {
            let blob = header_bytes(envelope_type, 4326, &[]);
            let err = GpkgHeader::decode(&blob).unwrap_err();
            assert!(matches!(err, Error::InvalidEnvelopeType(code) if code == envelope_type));
        }
    }

    #[test]
    fn test_truncated_prefix() {
        let err = GpkgHeader::decode(&[0x47, 0x50, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                needed: 8,
                available: 3
            }
        ));
    }

    #[test]
    fn test_truncated_envelope() {
        let mut blob = header_bytes(1, 4326, &[0.0, 1.0, 0.0, 1.0]);
        blob.truncate(30);
        let err = GpkgHeader::decode(&blob).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                needed: 40,
                available: 30
            }
        ));
    }
}
