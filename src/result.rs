//! Analysis result types: file comprehension and vulnerability verdict.

#[cfg(feature = "serde")]
use serde::Serialize;

/// High-level verdict after analyzing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Verdict {
    /// No leftover-data signature found after the end-of-image marker.
    Benign,
    /// Trailing bytes match the acropalypse leaked-data pattern.
    Vulnerable,
}

/// Trust level for a detector: higher trust = fewer expected false positives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrustLevel {
    /// Reliable signal; low expected false positive rate.
    High,
    /// May produce false positives; triage recommended.
    Low,
}

/// A detected threat (CVE or exploit pattern).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Threat {
    /// Short identifier (e.g. "CVE-2023-21036").
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Optional reference (advisory, writeup, etc.).
    pub reference: Option<String>,
    /// Detector trust level (high = reliable, low = may have FP).
    pub trust: TrustLevel,
}

/// Where the logical image ends and how many bytes trail it.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TrailerInfo {
    /// Byte offset of the first trailing byte (just past the end-of-image
    /// marker: the IEND chunk's checksum for PNG, the first EOI for JPEG).
    pub offset: usize,
    /// Number of trailing bytes (0 = nothing appended).
    pub len: usize,
}

/// Detailed comprehension of the file (format-specific facts).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FileComprehension {
    /// Format identifier (e.g. "PNG", "JPEG").
    pub format: String,
    /// Format-specific details (e.g. chunk count, trailer offset).
    pub details: Vec<String>,
    /// Any analysis warnings (heuristic caveats, odd structure).
    pub warnings: Vec<String>,
    /// Trailer location and size, when the end-of-image marker was found.
    pub trailer: Option<TrailerInfo>,
}

/// Result of analyzing a file for leftover-data remnants.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnalysisResult {
    /// Overall verdict.
    pub verdict: Verdict,
    /// Detected threats (empty if benign).
    pub threats: Vec<Threat>,
    /// Detailed file comprehension.
    pub comprehension: FileComprehension,
    /// Size of the input in bytes (if known).
    pub size_bytes: Option<usize>,
}

impl AnalysisResult {
    /// Create a benign result with comprehension.
    pub fn benign(comprehension: FileComprehension, size_bytes: Option<usize>) -> Self {
        Self {
            verdict: Verdict::Benign,
            threats: Vec::new(),
            comprehension,
            size_bytes,
        }
    }

    /// Create a vulnerable result with threats and comprehension.
    pub fn vulnerable(
        threats: Vec<Threat>,
        comprehension: FileComprehension,
        size_bytes: Option<usize>,
    ) -> Self {
        Self {
            verdict: Verdict::Vulnerable,
            threats,
            comprehension,
            size_bytes,
        }
    }

    /// True if the verdict flags the file as potentially vulnerable.
    #[inline]
    pub fn is_vulnerable(&self) -> bool {
        self.verdict == Verdict::Vulnerable
    }
}
