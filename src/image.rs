use crate::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageOutputFormat, RgbImage};
use std::io::Cursor;

/// One RGB image as produced by the host pipeline: row-major float
/// channels, values nominally in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl ImageTensor {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(Error::image_tensor(format!(
                "expected {} floats for {}x{} RGB, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Scales to 8-bit: multiply by 255, clip to `0..=255`, truncate.
    pub fn to_rgb8(&self) -> RgbImage {
        let pixels = self
            .data
            .iter()
            .map(|&value| (value * 255.0).clamp(0.0, 255.0) as u8)
            .collect::<Vec<u8>>();

        // Length was validated at construction.
        RgbImage::from_raw(self.width, self.height, pixels)
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }

    /// PNG-encodes the 8-bit image and base64-encodes the result, the
    /// format the generation endpoint expects in its `images` field.
    pub fn to_png_base64(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.to_rgb8()
            .write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Png)?;

        Ok(STANDARD.encode(&buffer))
    }

    /// Decodes a PNG back into a float tensor (values divided by 255).
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = rgb
            .into_raw()
            .into_iter()
            .map(|byte| f32::from(byte) / 255.0)
            .collect();

        Self::new(width, height, data)
    }
}

/// Encodes a batch of tensors for the request's `images` field.
pub fn encode_batch(images: &[ImageTensor]) -> Result<Vec<String>> {
    images.iter().map(ImageTensor::to_png_base64).collect()
}
