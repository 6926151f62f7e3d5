//! Image analyzer
//!
//! Decodes the resolved file with one of two in-process backends and
//! returns display dimensions corrected for EXIF orientation. A corrupt,
//! unsupported, or zero-byte file yields empty metadata.

use std::io::Cursor;

use mediaprobe_core::{ImageBackend, Metadata};

use crate::orientation::{oriented_dimensions, Rotation};
use crate::resolver::ResolvedFile;

/// Which image backends this build carries.
///
/// Computed once at startup and injected into the analyzer; a configured
/// backend that was compiled out degrades to empty metadata instead of
/// failing the call.
#[derive(Debug, Clone, Copy)]
pub struct BackendCapability {
    decoder: bool,
    header_probe: bool,
}

impl BackendCapability {
    pub fn detect() -> Self {
        Self {
            decoder: cfg!(feature = "backend-image"),
            header_probe: cfg!(feature = "backend-imagesize"),
        }
    }

    pub fn supports(&self, backend: ImageBackend) -> bool {
        match backend {
            ImageBackend::Decoder => self.decoder,
            ImageBackend::HeaderProbe => self.header_probe,
        }
    }
}

pub struct ImageAnalyzer {
    backend: ImageBackend,
    capability: BackendCapability,
}

impl ImageAnalyzer {
    pub fn new(backend: ImageBackend, capability: BackendCapability) -> Self {
        Self {
            backend,
            capability,
        }
    }

    pub async fn metadata(&self, file: &ResolvedFile) -> Metadata {
        let mut metadata = Metadata::new();
        if file.is_empty() {
            return metadata;
        }
        if !self.capability.supports(self.backend) {
            tracing::warn!(
                backend = ?self.backend,
                "Configured image backend is not compiled into this build"
            );
            return metadata;
        }

        let data = match tokio::fs::read(file.path()).await {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read resolved image file");
                return metadata;
            }
        };

        let Some((width, height)) = self.stored_dimensions(&data) else {
            return metadata;
        };
        let (width, height) = oriented_dimensions(width, height, exif_rotation(&data));

        metadata.set("width", width);
        metadata.set("height", height);
        metadata
    }

    /// Dimensions of the stored pixel grid, before orientation correction.
    fn stored_dimensions(&self, data: &[u8]) -> Option<(u64, u64)> {
        match self.backend {
            ImageBackend::Decoder => decode_dimensions(data),
            ImageBackend::HeaderProbe => header_dimensions(data),
        }
    }
}

#[cfg(feature = "backend-image")]
fn decode_dimensions(data: &[u8]) -> Option<(u64, u64)> {
    use image::GenericImageView;

    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    let img = reader.decode().ok()?;
    let (width, height) = img.dimensions();
    Some((u64::from(width), u64::from(height)))
}

#[cfg(not(feature = "backend-image"))]
fn decode_dimensions(_data: &[u8]) -> Option<(u64, u64)> {
    None
}

#[cfg(feature = "backend-imagesize")]
fn header_dimensions(data: &[u8]) -> Option<(u64, u64)> {
    let size = imagesize::blob_size(data).ok()?;
    Some((size.width as u64, size.height as u64))
}

#[cfg(not(feature = "backend-imagesize"))]
fn header_dimensions(_data: &[u8]) -> Option<(u64, u64)> {
    None
}

#[cfg(any(feature = "backend-image", feature = "backend-imagesize"))]
fn exif_rotation(data: &[u8]) -> Rotation {
    let mut cursor = Cursor::new(data);
    match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(exif_data) => exif_data
            .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(|code| Rotation::from_exif_code(code as u16))
            .unwrap_or_default(),
        Err(_) => Rotation::None,
    }
}

#[cfg(not(any(feature = "backend-image", feature = "backend-imagesize")))]
fn exif_rotation(_data: &[u8]) -> Rotation {
    Rotation::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachable::Attachable;
    use crate::resolver::AttachableResolver;
    use bytes::Bytes;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
            .unwrap();
        buffer
    }

    /// Splice a minimal Exif APP1 segment (single orientation tag) into a
    /// JPEG right after the SOI marker.
    fn jpeg_with_orientation(width: u32, height: u32, orientation: u8) -> Vec<u8> {
        let jpeg = jpeg_bytes(width, height);
        assert_eq!(&jpeg[0..2], b"\xff\xd8");

        #[rustfmt::skip]
        let tiff: [u8; 26] = [
            0x49, 0x49, 0x2a, 0x00,             // "II", TIFF magic (little-endian)
            0x08, 0x00, 0x00, 0x00,             // IFD0 offset
            0x01, 0x00,                         // one entry
            0x12, 0x01, 0x03, 0x00,             // tag 0x0112 (Orientation), SHORT
            0x01, 0x00, 0x00, 0x00,             // count 1
            orientation, 0x00, 0x00, 0x00,      // value, padded
            0x00, 0x00, 0x00, 0x00,             // no next IFD
        ];

        let mut payload = Vec::from(&b"Exif\x00\x00"[..]);
        payload.extend_from_slice(&tiff);

        let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
        out.extend_from_slice(&jpeg[0..2]);
        out.extend_from_slice(&[0xff, 0xe1]);
        out.extend_from_slice(&((payload.len() as u16 + 2).to_be_bytes()));
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    async fn analyze(backend: ImageBackend, data: Vec<u8>, filename: &str) -> Metadata {
        let resolver = AttachableResolver::new();
        let file = resolver
            .resolve(&Attachable::Bytes {
                data: Bytes::from(data),
                filename: filename.to_string(),
                content_type: None,
            })
            .await
            .unwrap();
        ImageAnalyzer::new(backend, BackendCapability::detect())
            .metadata(&file)
            .await
    }

    #[tokio::test]
    async fn test_png_dimensions() {
        let metadata = analyze(ImageBackend::Decoder, png_bytes(150, 150), "red.png").await;
        assert_eq!(metadata.get_u64("width"), Some(150));
        assert_eq!(metadata.get_u64("height"), Some(150));
        assert_eq!(metadata.len(), 2);
    }

    #[tokio::test]
    async fn test_backends_agree_on_dimensions() {
        let decoded = analyze(ImageBackend::Decoder, png_bytes(320, 200), "a.png").await;
        let probed = analyze(ImageBackend::HeaderProbe, png_bytes(320, 200), "a.png").await;
        assert_eq!(decoded, probed);
    }

    #[tokio::test]
    async fn test_rotated_jpeg_swaps_dimensions() {
        // Stored pixel grid 500x700, orientation 6 (90 degrees): displayed
        // as 700x500.
        let data = jpeg_with_orientation(500, 700, 6);
        let metadata = analyze(ImageBackend::Decoder, data, "rotated.jpg").await;
        assert_eq!(metadata.get_u64("width"), Some(700));
        assert_eq!(metadata.get_u64("height"), Some(500));
    }

    #[tokio::test]
    async fn test_upside_down_jpeg_keeps_dimensions() {
        // Orientation 3 (180 degrees) does not swap.
        let data = jpeg_with_orientation(500, 700, 3);
        let metadata = analyze(ImageBackend::Decoder, data, "flipped.jpg").await;
        assert_eq!(metadata.get_u64("width"), Some(500));
        assert_eq!(metadata.get_u64("height"), Some(700));
    }

    #[tokio::test]
    async fn test_rotated_jpeg_header_probe_backend() {
        let data = jpeg_with_orientation(500, 700, 8);
        let metadata = analyze(ImageBackend::HeaderProbe, data, "rotated.jpg").await;
        assert_eq!(metadata.get_u64("width"), Some(700));
        assert_eq!(metadata.get_u64("height"), Some(500));
    }

    #[tokio::test]
    async fn test_corrupt_image_yields_empty_metadata() {
        let metadata = analyze(
            ImageBackend::Decoder,
            b"definitely not an image".to_vec(),
            "junk.png",
        )
        .await;
        assert!(metadata.is_empty());
    }

    #[tokio::test]
    async fn test_zero_byte_image_yields_empty_metadata() {
        let metadata = analyze(ImageBackend::Decoder, Vec::new(), "empty.png").await;
        assert!(metadata.is_empty());
    }
}
