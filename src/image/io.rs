//! Rendered output buffer plus file helpers for the demo tooling.
//!
//! - `GrayImageU8`: owned 8-bit grayscale result handed to the renderer.
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write a `GrayImageU8` to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageI32, ImageU8};
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned, tightly packed 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Saturate an intensity grid into 0..=255.
    pub fn from_intensity(image: &ImageI32) -> Self {
        let data = image
            .data
            .iter()
            .map(|&v| v.clamp(0, 255) as u8)
            .collect();
        Self::new(image.w, image.h, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    /// Pack every sample as an opaque gray ARGB pixel (`0xFFyyyyyy`).
    pub fn to_argb(&self) -> Vec<u32> {
        self.data
            .iter()
            .map(|&y| {
                let y = u32::from(y);
                0xFF00_0000 | (y << 16) | (y << 8) | y
            })
            .collect()
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
