//! `file -b --mime-type` output parsing

use mediaprobe_core::EMPTY_CONTENT_TYPE;

/// The whole trimmed stdout is the MIME type. Empty output maps to the
/// synthetic zero-byte type.
pub fn parse(stdout: &str) -> String {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        EMPTY_CONTENT_TYPE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_trailing_newline() {
        assert_eq!(parse("image/png\n"), "image/png");
        assert_eq!(parse("  video/mp4  "), "video/mp4");
    }

    #[test]
    fn test_empty_output_is_synthetic_empty_type() {
        assert_eq!(parse(""), EMPTY_CONTENT_TYPE);
        assert_eq!(parse("\n"), EMPTY_CONTENT_TYPE);
    }
}
