//! Analysis failures: structural parse errors for one specific file.
//!
//! A failed analysis never means "vulnerable" and never aborts a directory
//! scan; callers match on the error kind and skip the file.

use thiserror::Error;

/// Structural failure while analyzing a single file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// PNG container violates the format far enough that the trailer cannot
    /// be located (bad signature, truncated chunk, checksum mismatch).
    #[error("malformed PNG: {0}")]
    MalformedPng(String),

    /// JPEG container violates the JFIF layout or has no end-of-image marker.
    #[error("malformed JPEG: {0}")]
    MalformedJpeg(String),

    /// A read ran past the end of the available bytes.
    #[error("unexpected end of data at offset {offset} (needed {needed} more bytes)")]
    UnexpectedEof { offset: usize, needed: usize },
}
