//! PNG analyzer: CVE-2023-21036 (acropalypse — leftover image data after IEND).
//!
//! References:
//! - https://www.cve.org/CVERecord?id=CVE-2023-21036
//! - https://gist.github.com/DavidBuchanan314/93de9d07f7fab494bcdf17c2bd6cef02

mod parser;

pub mod analyzer;

pub use analyzer::analyze_png;
pub use parser::{is_png, read_chunk, split_trailer, PngChunk, EMPTY_IEND_CRC, PNG_SIGNATURE};
