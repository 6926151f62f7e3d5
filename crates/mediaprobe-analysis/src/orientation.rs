//! Orientation normalization
//!
//! The image backends and ffprobe all report rotation differently: numeric
//! EXIF codes (1–8), TIFF-style position tokens ("right-top"), and signed
//! degrees. Everything funnels into one [`Rotation`] so the swap rule lives
//! in a single place.

/// Rotation applied to stored pixel data before display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    None,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// From a numeric EXIF orientation code (1–8). Codes 5–8 are the
    /// transposed orientations whose display dimensions are swapped.
    pub fn from_exif_code(code: u16) -> Self {
        match code {
            3 | 4 => Rotation::Rotate180,
            5 | 6 => Rotation::Rotate90,
            7 | 8 => Rotation::Rotate270,
            _ => Rotation::None,
        }
    }

    /// From a TIFF-style position token as reported by libvips-like
    /// backends ("right-top", "left-bottom", ...).
    pub fn from_tiff_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "right-top" | "top-right" => Rotation::Rotate90,
            "left-bottom" | "bottom-left" => Rotation::Rotate270,
            "bottom-right" | "right-bottom" => Rotation::Rotate180,
            _ => Rotation::None,
        }
    }

    /// From a rotation angle in degrees, as found in video containers.
    /// Only right-angle values map to a rotation; anything else (including
    /// 45) is treated as no rotation.
    pub fn from_degrees(degrees: i64) -> Self {
        match degrees.rem_euclid(360) {
            90 => Rotation::Rotate90,
            180 => Rotation::Rotate180,
            270 => Rotation::Rotate270,
            _ => Rotation::None,
        }
    }

    /// Whether displayed width/height are swapped relative to storage.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

/// Stored dimensions corrected for display orientation.
pub fn oriented_dimensions(width: u64, height: u64, rotation: Rotation) -> (u64, u64) {
    if rotation.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    }
}
