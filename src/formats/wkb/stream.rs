//! Reading concatenated geometry streams
//!
//! Some storage columns hold several top-level geometries back to back in
//! one buffer. Each is self-describing, so the stream is decoded by
//! repeatedly dispatching at the cursor and advancing by the consumed
//! length.

use tracing::warn;

use super::geometry::Geometry;
use crate::error::Result;

/// Decodes every concatenated top-level geometry in `bytes`
///
/// Geometries are returned in encounter order; an empty buffer yields an
/// empty sequence. A decode error aborts the whole stream. After a
/// successful pass the total bytes consumed are checked against the buffer
/// length; a mismatch is logged and whatever was decoded is still returned
/// without any attempt to resynchronize.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<Geometry>> {
    let mut geometries = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let (geometry, consumed) = Geometry::decode(&bytes[cursor..])?;
        if consumed == 0 {
            break;
        }
        cursor += consumed;
        geometries.push(geometry);
    }

    if cursor != bytes.len() {
        warn!(
            consumed = cursor,
            length = bytes.len(),
            "bytes consumed reading geometries do not match data length"
        );
    }

    Ok(geometries)
}
