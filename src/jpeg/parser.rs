//! Minimal JPEG/JFIF header walk and end-of-image location.
//!
//! Only the SOI/APP0/JFIF prologue is validated; the end of the image is then
//! found by a raw byte search for the first EOI marker over the whole content.
//! That search is not segment-aware: an `FF D9` inside entropy-coded scan data
//! will match first and shift the trailer boundary.

use crate::error::AnalysisError;
use crate::reader::ByteReader;

/// Start-of-image marker.
pub const SOI_MARKER: [u8; 2] = [0xFF, 0xD8];
/// JFIF application segment marker (APP0).
pub const APP0_MARKER: [u8; 2] = [0xFF, 0xE0];
/// End-of-image marker.
pub const EOI_MARKER: [u8; 2] = [0xFF, 0xD9];
/// JFIF identifier at the start of the APP0 body.
pub const JFIF_SIGNATURE: [u8; 4] = *b"JFIF";

/// Detect if data starts with the SOI marker.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= SOI_MARKER.len() && data[..SOI_MARKER.len()] == SOI_MARKER
}

/// Validate the SOI marker and the JFIF APP0 segment at the reader's
/// position. The APP0 body is not interpreted beyond its signature.
fn read_jfif_header(reader: &mut ByteReader<'_>) -> Result<(), AnalysisError> {
    if reader.read_bytes(2)? != SOI_MARKER {
        return Err(AnalysisError::MalformedJpeg(
            "missing SOI marker".to_string(),
        ));
    }
    if reader.read_bytes(2)? != APP0_MARKER {
        return Err(AnalysisError::MalformedJpeg(
            "missing APP0 marker".to_string(),
        ));
    }
    let declared = reader.read_u16_be()? as usize;
    // Segment length counts its own two bytes.
    if declared < 2 {
        return Err(AnalysisError::MalformedJpeg(format!(
            "APP0 length {} too short",
            declared
        )));
    }
    let body = reader.read_bytes(declared - 2)?;
    if body.len() < JFIF_SIGNATURE.len() || body[..JFIF_SIGNATURE.len()] != JFIF_SIGNATURE {
        return Err(AnalysisError::MalformedJpeg(
            "missing JFIF signature in APP0".to_string(),
        ));
    }
    Ok(())
}

/// Validate the JFIF prologue, then locate the first EOI marker anywhere in
/// the content and split off the trailer.
/// Returns (offset of the first trailing byte, trailer slice).
pub fn split_trailer(data: &[u8]) -> Result<(usize, &[u8]), AnalysisError> {
    let mut reader = ByteReader::new(data);
    read_jfif_header(&mut reader)?;

    reader.seek(0)?;
    let eoi_pos = reader.find(&EOI_MARKER).ok_or_else(|| {
        AnalysisError::MalformedJpeg("no EOI marker in content".to_string())
    })?;

    let offset = eoi_pos + EOI_MARKER.len();
    reader.seek(offset)?;
    Ok((offset, reader.read_to_end()))
}
