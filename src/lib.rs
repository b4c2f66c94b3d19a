//! # acroscan
//!
//! Library to detect acropalypse-style data remnants in image files: a
//! cropped or edited image re-saved in place that still carries bytes of the
//! original, uncropped image after the container's logical end-of-image
//! marker. Anything a viewer ignores past that marker can often be partially
//! recovered, leaking the cropped-away content.
//!
//! Designed for slice-based parsing with minimal allocations: read a file
//! into memory (or map it) and hand the bytes to [`analyze`].
//!
//! ## Supported formats and threats
//!
//! - **PNG**
//!   - [CVE-2023-21036](https://www.cve.org/CVERecord?id=CVE-2023-21036): Google Pixel Markup
//!     crop tool truncation bug (acropalypse). Detected by a buried empty-IEND
//!     footer at the end of the bytes trailing the first IEND chunk.
//! - **JPEG/JFIF**
//!   - [CVE-2023-28303](https://msrc.microsoft.com/update-guide/vulnerability/CVE-2023-28303):
//!     Windows Snipping Tool variant. Detected by a second EOI marker at the
//!     end of the bytes trailing the first EOI.
//!
//! Both checks are heuristics: they confirm a *pattern consistent with*
//! leaked data, not the leak itself, and the JPEG end-of-image search is a
//! raw byte scan that can match inside entropy-coded data.
//!
//! ## Example
//!
//! ```no_run
//! use acroscan::{analyze, Verdict};
//!
//! let bytes = std::fs::read("screenshot.png").unwrap();
//! match analyze(&bytes) {
//!     Ok(result) if result.verdict == Verdict::Vulnerable => {
//!         println!("Threats: {:?}", result.threats);
//!     }
//!     Ok(_) => {}
//!     Err(err) => eprintln!("skipped: {err}"),
//! }
//! ```

mod error;
mod reader;
mod result;

pub mod jpeg;
pub mod png;

pub use error::AnalysisError;
pub use jpeg::analyze_jpeg;
pub use png::analyze_png;
pub use reader::ByteReader;
pub use result::{AnalysisResult, FileComprehension, Threat, TrailerInfo, TrustLevel, Verdict};

/// File type hint for routing, from the first two bytes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FileType {
    Png,
    Jpeg,
    Unknown,
}

impl FileType {
    /// Preferred extension for this type; `None` for Unknown.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            FileType::Png => Some("png"),
            FileType::Jpeg => Some("jpg"),
            FileType::Unknown => None,
        }
    }
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            FileType::Png => "PNG",
            FileType::Jpeg => "JPEG",
            FileType::Unknown => "unknown",
        }
    }
}

/// Classify by the 2-byte prefix: `89 50` is a PNG candidate, `FF D8` a JPEG
/// candidate. Deliberately cheap — full signature validation happens inside
/// the analyzers and may still fail there.
#[inline]
pub fn detect_file_type(data: &[u8]) -> FileType {
    match data {
        [0x89, 0x50, ..] => FileType::Png,
        [0xFF, 0xD8, ..] => FileType::Jpeg,
        _ => FileType::Unknown,
    }
}

/// Analyze file bytes: dispatch by format and run the matching trailer check.
/// Unrecognized data gets a benign result labeled "unknown"; a structural
/// parse failure in either analyzer surfaces as an error for the caller to
/// skip.
#[inline]
pub fn analyze(data: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    match detect_file_type(data) {
        FileType::Png => png::analyze_png(data),
        FileType::Jpeg => jpeg::analyze_jpeg(data),
        FileType::Unknown => Ok(AnalysisResult::benign(
            FileComprehension {
                format: "unknown".to_string(),
                details: vec!["No recognized image format".to_string()],
                warnings: Vec::new(),
                trailer: None,
            },
            Some(data.len()),
        )),
    }
}

/// Result of analyzing one item in a batch (path or index + outcome).
#[derive(Debug, Clone)]
pub struct BatchItem<T> {
    pub path_or_id: T,
    pub result: Result<AnalysisResult, AnalysisError>,
}

/// Analyze many buffers in sequence, preserving input order. Each buffer is
/// independent; failed items carry their error instead of aborting the batch.
pub fn analyze_batch<I, B>(items: I) -> Vec<BatchItem<B>>
where
    I: IntoIterator<Item = (B, Vec<u8>)>,
    B: Clone,
{
    items
        .into_iter()
        .map(|(path_or_id, bytes)| BatchItem {
            path_or_id,
            result: analyze(&bytes),
        })
        .collect()
}
