//! Byte-level image codec.
//!
//! Reading and writing go through raw byte buffers: the filesystem layer
//! only ever moves bytes, and the image codec only ever sees bytes. Path
//! handling and codec concerns therefore never share a failure mode, and
//! filenames the platform's narrow text encoding cannot represent still
//! round-trip.
use std::fs;
use std::path::Path;

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

/// Read the file at `path` and decode its bytes as an 8-bit color image.
pub fn read_image(path: &Path) -> Result<RgbImage> {
    let bytes = fs::read(path)?;
    let decoded =
        image::load_from_memory(&bytes).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(decoded.to_rgb8())
}

/// Encode `image` as a baseline JPEG at `quality` (0-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(Error::Encode(format!(
            "image {width}x{height} exceeds JPEG dimension limits"
        )));
    }

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality);
    encoder
        .encode(image.as_raw(), width as u16, height as u16, ColorType::Rgb)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encode `image` as JPEG and write the bytes to `path`.
pub fn write_image(path: &Path, image: &RgbImage, quality: u8) -> Result<()> {
    let bytes = encode_jpeg(image, quality)?;
    fs::write(path, bytes)?;
    Ok(())
}
