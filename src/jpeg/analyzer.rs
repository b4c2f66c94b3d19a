//! JPEG analyzer: CVE-2023-28303 (acropalypse — cropped JPEG re-saved over
//! the original buffer, leaving the original's tail after the new EOI).

use crate::error::AnalysisError;
use crate::jpeg::parser::{split_trailer, EOI_MARKER};
use crate::result::{AnalysisResult, FileComprehension, Threat, TrailerInfo, TrustLevel};

const CVE_2023_28303_ID: &str = "CVE-2023-28303";
const CVE_2023_28303_DESC: &str =
    "JPEG data remnant after EOI (acropalypse; cropped image re-saved in place retains original image bytes)";
const CVE_2023_28303_REF: &str =
    "https://msrc.microsoft.com/update-guide/vulnerability/CVE-2023-28303";

/// The leaked region of a re-saved cropped JPEG still ends with the original
/// file's own EOI marker.
#[inline]
fn trailer_has_second_eoi(trailer: &[u8]) -> bool {
    trailer.len() >= EOI_MARKER.len() && trailer[trailer.len() - EOI_MARKER.len()..] == EOI_MARKER
}

/// Analyze JPEG data for leftover original-image bytes after the first EOI.
/// Fails with `MalformedJpeg`/`UnexpectedEof` when the JFIF prologue is
/// invalid or no EOI exists; the caller is expected to skip such files.
pub fn analyze_jpeg(data: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    let size = data.len();
    let mut comprehension = FileComprehension {
        format: "JPEG".to_string(),
        details: Vec::new(),
        warnings: Vec::new(),
        trailer: None,
    };

    let (offset, trailer) = split_trailer(data)?;
    comprehension.trailer = Some(TrailerInfo {
        offset,
        len: trailer.len(),
    });
    comprehension
        .details
        .push(format!("first EOI ends at offset {}", offset));

    if trailer.is_empty() {
        comprehension
            .details
            .push("No data after EOI".to_string());
        return Ok(AnalysisResult::benign(comprehension, Some(size)));
    }

    comprehension
        .details
        .push(format!("{} trailing bytes after EOI", trailer.len()));
    comprehension.warnings.push(
        "EOI located by raw byte search; FF D9 inside scan data shifts the trailer boundary"
            .to_string(),
    );

    if !trailer_has_second_eoi(trailer) {
        return Ok(AnalysisResult::benign(comprehension, Some(size)));
    }

    let threat = Threat {
        id: CVE_2023_28303_ID.to_string(),
        description: format!(
            "{} — {} bytes of trailing data ending in a second EOI marker",
            CVE_2023_28303_DESC,
            trailer.len()
        ),
        reference: Some(CVE_2023_28303_REF.to_string()),
        trust: TrustLevel::Low,
    };
    Ok(AnalysisResult::vulnerable(
        vec![threat],
        comprehension,
        Some(size),
    ))
}
