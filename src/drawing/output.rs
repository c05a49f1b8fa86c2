use anyhow::Result;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_OUTPUT: &str = "sample.jpg";
pub const DEFAULT_QUALITY: u8 = 100;

/// Encode the canvas as JPEG into any writer.
/// JPEG carries no alpha, so the canvas is flattened to RGB first.
pub fn encode_jpeg<W: Write>(writer: W, img: &RgbaImage, quality: u8) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let mut encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    encoder
        .encode_image(&rgb)
        .map_err(|e| anyhow::anyhow!("Failed to encode JPEG: {}", e))
}

/// Create `path` and write the canvas to it as JPEG
pub fn write_jpeg(path: &Path, img: &RgbaImage, quality: u8) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    let mut writer = BufWriter::new(file);

    encode_jpeg(&mut writer, img, quality)?;
    writer
        .flush()
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;

    Ok(())
}
