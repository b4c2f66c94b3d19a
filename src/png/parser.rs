//! Minimal PNG chunk walker: locates the IEND chunk and captures the trailer.
//! Chunks are checksum-verified but never decoded.
//! See http://www.libpng.org/pub/png/spec/1.2/PNG-Structure.html

use crate::error::AnalysisError;
use crate::reader::ByteReader;

/// PNG signature: \x89PNG\r\n\x1a\n (8 bytes).
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// End-of-image chunk type.
pub const IEND_TYPE: [u8; 4] = *b"IEND";

/// CRC-32 of an empty IEND chunk (over the 4 type bytes alone).
pub const EMPTY_IEND_CRC: u32 = 0xAE42_6082;

/// Detect if data starts with the full PNG signature.
#[inline]
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// One parsed chunk. The body is borrowed; the stored checksum has already
/// been verified against CRC-32(type ‖ body) when this exists.
#[derive(Debug, Clone, Copy)]
pub struct PngChunk<'a> {
    pub chunk_type: [u8; 4],
    pub body: &'a [u8],
}

impl PngChunk<'_> {
    /// True for the end-of-image chunk.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.chunk_type == IEND_TYPE
    }
}

/// Read one chunk at the reader's position: u32-BE length, 4-byte type,
/// body, u32-BE CRC. Fails on truncation or checksum mismatch.
pub fn read_chunk<'a>(reader: &mut ByteReader<'a>) -> Result<PngChunk<'a>, AnalysisError> {
    let length = reader.read_u32_be()? as usize;
    let type_bytes = reader.read_bytes(4)?;
    let chunk_type = [type_bytes[0], type_bytes[1], type_bytes[2], type_bytes[3]];
    let body = reader.read_bytes(length)?;
    let stored_crc = reader.read_u32_be()?;

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&chunk_type);
    hasher.update(body);
    if hasher.finalize() != stored_crc {
        return Err(AnalysisError::MalformedPng(format!(
            "chunk {} checksum mismatch",
            String::from_utf8_lossy(&chunk_type)
        )));
    }

    Ok(PngChunk { chunk_type, body })
}

/// Walk chunks up to IEND and split off the trailer.
/// Returns (offset of the first trailing byte, trailer slice).
pub fn split_trailer(data: &[u8]) -> Result<(usize, &[u8]), AnalysisError> {
    let mut reader = ByteReader::new(data);

    let signature = reader.read_bytes(PNG_SIGNATURE.len())?;
    if signature != PNG_SIGNATURE {
        return Err(AnalysisError::MalformedPng("invalid PNG signature".to_string()));
    }

    loop {
        let chunk = read_chunk(&mut reader)?;
        if chunk.is_end() {
            break;
        }
    }

    let offset = reader.position();
    Ok((offset, reader.read_to_end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(chunk_type: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(chunk_type);
        hasher.update(body);
        let mut v = Vec::new();
        v.extend_from_slice(&(body.len() as u32).to_be_bytes());
        v.extend_from_slice(chunk_type);
        v.extend_from_slice(body);
        v.extend_from_slice(&hasher.finalize().to_be_bytes());
        v
    }

    #[test]
    fn empty_iend_crc_constant_matches() {
        assert_eq!(crc32fast::hash(b"IEND"), EMPTY_IEND_CRC);
    }

    #[test]
    fn splits_at_iend() {
        let mut v = Vec::new();
        v.extend_from_slice(&PNG_SIGNATURE);
        v.extend_from_slice(&chunk(b"IHDR", &[0u8; 13]));
        v.extend_from_slice(&chunk(b"IEND", b""));
        let logical_end = v.len();
        v.extend_from_slice(b"leftover");

        let (offset, trailer) = split_trailer(&v).unwrap();
        assert_eq!(offset, logical_end);
        assert_eq!(trailer, b"leftover");
    }

    #[test]
    fn checksum_mismatch_rejected() {
        let mut v = Vec::new();
        v.extend_from_slice(&PNG_SIGNATURE);
        let mut bad = chunk(b"IHDR", &[0u8; 13]);
        let last = bad.len() - 1;
        bad[last] ^= 0xFF;
        v.extend_from_slice(&bad);
        v.extend_from_slice(&chunk(b"IEND", b""));

        assert!(matches!(
            split_trailer(&v),
            Err(AnalysisError::MalformedPng(_))
        ));
    }

    #[test]
    fn truncated_chunk_is_eof() {
        let mut v = Vec::new();
        v.extend_from_slice(&PNG_SIGNATURE);
        v.extend_from_slice(&0x0000_0010u32.to_be_bytes());
        v.extend_from_slice(b"IDAT");
        assert!(matches!(
            split_trailer(&v),
            Err(AnalysisError::UnexpectedEof { .. })
        ));
    }
}
