//! JPEG analyzer: CVE-2023-28303 (acropalypse — leftover image data after the
//! end-of-image marker).
//!
//! References:
//! - https://www.cve.org/CVERecord?id=CVE-2023-28303
//! - https://msrc.microsoft.com/update-guide/vulnerability/CVE-2023-28303

mod parser;

pub mod analyzer;

pub use analyzer::analyze_jpeg;
pub use parser::{is_jpeg, split_trailer, APP0_MARKER, EOI_MARKER, JFIF_SIGNATURE, SOI_MARKER};
