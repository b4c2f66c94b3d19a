//! PNG analyzer and parser tests over synthetic containers.

use acroscan::png::{analyze_png, is_png, split_trailer, EMPTY_IEND_CRC, PNG_SIGNATURE};
use acroscan::{AnalysisError, Verdict};

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

fn minimal_png() -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(&PNG_SIGNATURE);
    v.extend_from_slice(&chunk(b"IHDR", &[0u8; 13]));
    v.extend_from_slice(&chunk(b"IDAT", b"compressed"));
    v.extend_from_slice(&chunk(b"IEND", b""));
    v
}

/// The 8-byte footer a leaked buffer ends with: zero length + empty-IEND CRC.
fn buried_iend_footer() -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(&0u32.to_be_bytes());
    v.extend_from_slice(&EMPTY_IEND_CRC.to_be_bytes());
    v
}

#[test]
fn signature_detection() {
    assert!(is_png(&minimal_png()));
    assert!(!is_png(&[0x89, 0x50, 0x4E, 0x47]));
    assert!(!is_png(b"\xFF\xD8\xFF\xE0"));
}

#[test]
fn empty_trailer_is_benign() {
    let r = analyze_png(&minimal_png()).unwrap();
    assert_eq!(r.verdict, Verdict::Benign);
    let trailer = r.comprehension.trailer.unwrap();
    assert_eq!(trailer.len, 0);
}

#[test]
fn buried_iend_is_vulnerable_regardless_of_prefix() {
    for prefix in [&b""[..], b"x", b"several leaked rows of pixel data"] {
        let mut v = minimal_png();
        v.extend_from_slice(prefix);
        v.extend_from_slice(&buried_iend_footer());
        let r = analyze_png(&v).unwrap();
        assert_eq!(
            r.verdict,
            Verdict::Vulnerable,
            "prefix {:?} should not matter",
            prefix
        );
        assert!(r.threats.iter().any(|t| t.id == "CVE-2023-21036"));
    }
}

#[test]
fn short_trailer_is_benign() {
    // Trailers under 8 bytes can never hold the footer; must not panic.
    for n in 1..8usize {
        let mut v = minimal_png();
        v.extend_from_slice(&vec![0xAB; n]);
        let r = analyze_png(&v).unwrap();
        assert_eq!(r.verdict, Verdict::Benign, "trailer of {} bytes", n);
    }
}

#[test]
fn round_trip_footer_appended_then_removed() {
    let mut v = minimal_png();
    v.extend_from_slice(&buried_iend_footer());
    let r = analyze_png(&v).unwrap();
    assert_eq!(r.verdict, Verdict::Vulnerable);

    v.truncate(v.len() - 8);
    let r = analyze_png(&v).unwrap();
    assert_eq!(r.verdict, Verdict::Benign);
}

#[test]
fn trailer_without_footer_is_benign() {
    let mut v = minimal_png();
    v.extend_from_slice(b"plain appended junk, no footer here");
    let r = analyze_png(&v).unwrap();
    assert_eq!(r.verdict, Verdict::Benign);
}

#[test]
fn crc_mismatch_is_malformed() {
    let mut v = Vec::new();
    v.extend_from_slice(&PNG_SIGNATURE);
    let mut bad = chunk(b"IHDR", &[0u8; 13]);
    let last = bad.len() - 1;
    bad[last] ^= 0x01;
    v.extend_from_slice(&bad);
    v.extend_from_slice(&chunk(b"IEND", b""));
    v.extend_from_slice(&buried_iend_footer());

    // The file is rejected before any verdict, even with a footer present.
    assert!(matches!(
        analyze_png(&v),
        Err(AnalysisError::MalformedPng(_))
    ));
}

#[test]
fn missing_iend_is_eof() {
    let mut v = Vec::new();
    v.extend_from_slice(&PNG_SIGNATURE);
    v.extend_from_slice(&chunk(b"IHDR", &[0u8; 13]));
    assert!(matches!(
        analyze_png(&v),
        Err(AnalysisError::UnexpectedEof { .. })
    ));
}

#[test]
fn trailer_offset_reported() {
    let clean_len = minimal_png().len();
    let mut v = minimal_png();
    v.extend_from_slice(b"0123456789");
    let (offset, trailer) = split_trailer(&v).unwrap();
    assert_eq!(offset, clean_len);
    assert_eq!(trailer.len(), 10);

    let r = analyze_png(&v).unwrap();
    let info = r.comprehension.trailer.unwrap();
    assert_eq!(info.offset, clean_len);
    assert_eq!(info.len, 10);
}
