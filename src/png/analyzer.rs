//! PNG analyzer: CVE-2023-21036 (acropalypse — cropped PNG re-saved over the
//! original buffer, leaving the original's tail after the new IEND).

use crate::error::AnalysisError;
use crate::png::parser::{split_trailer, EMPTY_IEND_CRC};
use crate::result::{AnalysisResult, FileComprehension, Threat, TrailerInfo, TrustLevel};

const CVE_2023_21036_ID: &str = "CVE-2023-21036";
const CVE_2023_21036_DESC: &str =
    "PNG data remnant after IEND (acropalypse; cropped image re-saved in place retains original image bytes)";
const CVE_2023_21036_REF: &str =
    "https://gist.github.com/DavidBuchanan314/93de9d07f7fab494bcdf17c2bd6cef02";

/// Check if the trailer ends in a buried empty-IEND footer: its last 8 bytes
/// read as u32-BE length 0 followed by the fixed empty-IEND CRC. A re-saved
/// cropped PNG written over the original buffer keeps the original's IEND
/// footer at the end of the leaked region.
#[inline]
fn trailer_has_buried_iend(trailer: &[u8]) -> bool {
    if trailer.len() < 8 {
        return false;
    }
    let tail = &trailer[trailer.len() - 8..];
    let length = u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]]);
    let checksum = u32::from_be_bytes([tail[4], tail[5], tail[6], tail[7]]);
    length == 0 && checksum == EMPTY_IEND_CRC
}

/// Analyze PNG data for leftover original-image bytes after IEND.
/// Fails with `MalformedPng`/`UnexpectedEof` when the chunk walk cannot reach
/// IEND; the caller is expected to skip such files.
pub fn analyze_png(data: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    let size = data.len();
    let mut comprehension = FileComprehension {
        format: "PNG".to_string(),
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
        .push(format!("IEND ends at offset {}", offset));

    if trailer.is_empty() {
        comprehension
            .details
            .push("No data after IEND".to_string());
        return Ok(AnalysisResult::benign(comprehension, Some(size)));
    }

    comprehension
        .details
        .push(format!("{} trailing bytes after IEND", trailer.len()));

    if !trailer_has_buried_iend(trailer) {
        return Ok(AnalysisResult::benign(comprehension, Some(size)));
    }

    comprehension.warnings.push(format!(
        "{}: trailer ends in a second empty-IEND footer",
        CVE_2023_21036_ID
    ));
    let threat = Threat {
        id: CVE_2023_21036_ID.to_string(),
        description: format!(
            "{} — {} bytes of trailing data ending in a valid IEND footer",
            CVE_2023_21036_DESC,
            trailer.len()
        ),
        reference: Some(CVE_2023_21036_REF.to_string()),
        trust: TrustLevel::High,
    };
    Ok(AnalysisResult::vulnerable(
        vec![threat],
        comprehension,
        Some(size),
    ))
}
