//! Content-type families and signature sniffing
//!
//! The spoof cross-check compares a *declared* content type against the type
//! the `file` tool derives from the actual bytes. Many formats are known
//! under several registered or legacy MIME names, so the comparison expands
//! both sides to their alias family and accepts any intersection.

/// Synthetic type reported for zero-byte content.
pub const EMPTY_CONTENT_TYPE: &str = "inode/x-empty";

/// Groups of MIME names that refer to the same underlying format.
///
/// The first entry of each group is the canonical name; the rest are legacy
/// or vendor aliases seen in the wild (and emitted by older `file` builds).
const FAMILIES: &[&[&str]] = &[
    &[
        "application/zip",
        "application/x-zip",
        "application/x-zip-compressed",
    ],
    &[
        "application/gzip",
        "application/x-gzip",
        "application/x-gunzip",
    ],
    &["audio/mpeg", "audio/mp3", "audio/x-mp3", "audio/x-mpeg"],
    &["audio/mp4", "audio/x-m4a", "audio/m4a"],
    &["audio/wav", "audio/x-wav", "audio/wave", "audio/vnd.wave"],
    &["application/xml", "text/xml"],
    &["image/jpeg", "image/pjpeg"],
    &["image/bmp", "image/x-ms-bmp", "image/x-bmp"],
    &["video/mp4", "application/mp4", "video/x-mp4"],
    &["video/quicktime", "video/x-quicktime"],
    &["application/pdf", "application/x-pdf"],
    &["text/plain", "application/txt"],
];

/// Strip any parameters (`; charset=...`) and normalize case.
fn normalize(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// All MIME names in the same family as `content_type`, including itself.
pub fn family(content_type: &str) -> Vec<String> {
    let normalized = normalize(content_type);
    for group in FAMILIES {
        if group.iter().any(|name| *name == normalized) {
            return group.iter().map(|name| name.to_string()).collect();
        }
    }
    vec![normalized]
}

/// Whether `declared` and `derived` name the same format, up to aliasing.
pub fn matches(declared: &str, derived: &str) -> bool {
    let declared_family = family(declared);
    family(derived)
        .iter()
        .any(|name| declared_family.contains(name))
}

/// Quick magic-byte sniff for a handful of common formats.
///
/// Advisory only; the `file` tool remains authoritative for spoof checks.
pub fn looks_like(data: &[u8]) -> Option<&'static str> {
    if data.is_empty() {
        return Some(EMPTY_CONTENT_TYPE);
    }
    if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some("image/png");
    }
    if data.starts_with(b"\xff\xd8\xff") {
        return Some("image/jpeg");
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if data.starts_with(b"%PDF") {
        return Some("application/pdf");
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WAVE" {
        return Some("audio/wav");
    }
    if data.starts_with(b"OggS") {
        return Some("audio/ogg");
    }
    if data.starts_with(b"fLaC") {
        return Some("audio/flac");
    }
    if data.starts_with(b"ID3") || data.starts_with(b"\xff\xfb") {
        return Some("audio/mpeg");
    }
    if data.starts_with(b"\x1a\x45\xdf\xa3") {
        return Some("video/x-matroska");
    }
    if data.len() >= 8 && &data[4..8] == b"ftyp" {
        return Some("video/mp4");
    }
    if data.starts_with(b"PK\x03\x04") {
        return Some("application/zip");
    }
    None
}
