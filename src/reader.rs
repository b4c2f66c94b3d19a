//! Slice cursor for container parsing: fixed-width big-endian fields,
//! pattern search, absolute seek. Format-agnostic; no side effects beyond
//! position advancement.

use crate::error::AnalysisError;

/// Cursor over a byte slice with a current read position.
///
/// All reads advance the position and fail with
/// [`AnalysisError::UnexpectedEof`] when fewer bytes remain than requested.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the slice.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Read exactly `n` bytes, advancing the position.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], AnalysisError> {
        if self.remaining() < n {
            return Err(AnalysisError::UnexpectedEof {
                offset: self.pos,
                needed: n - self.remaining(),
            });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Read a big-endian u16, advancing the position.
    pub fn read_u16_be(&mut self) -> Result<u16, AnalysisError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Read a big-endian u32, advancing the position.
    pub fn read_u32_be(&mut self) -> Result<u32, AnalysisError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Absolute offset of the first occurrence of `pattern` at or after the
    /// current position. Does not advance.
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() || self.remaining() < pattern.len() {
            return None;
        }
        self.data[self.pos..]
            .windows(pattern.len())
            .position(|w| w == pattern)
            .map(|i| self.pos + i)
    }

    /// Move the position to an absolute offset. Seeking past the end fails.
    pub fn seek(&mut self, pos: usize) -> Result<(), AnalysisError> {
        if pos > self.data.len() {
            return Err(AnalysisError::UnexpectedEof {
                offset: self.data.len(),
                needed: pos - self.data.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// All bytes from the current position to the end; position moves to the
    /// end. Empty slice when already there.
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let out = &self.data[self.pos..];
        self.pos = self.data.len();
        out
    }
}
