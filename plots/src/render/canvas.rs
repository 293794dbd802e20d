use image::ImageEncoder;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::PlotBytes;
use crate::coords::ExtentBox;
use crate::error::{PlotError, Result};
use crate::fallback::AxisFallback;

/// Encoded image format for [`Canvas::encode`]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Png,
    #[strum(serialize = "jpeg", serialize = "jpg")]
    Jpeg,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Png
    }
}

/// JPEG quality used by [`Canvas::encode`]
const JPEG_QUALITY: u8 = 85;

/// A drawing target: an RGB pixel buffer plus what was last drawn on it
///
/// The canvas is passed explicitly to every draw call. A draw either
/// replaces the whole canvas state or, on error, leaves it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    extent: Option<ExtentBox>,
    x_label: Option<String>,
    y_label: Option<String>,
    colorbar_label: Option<String>,
    warnings: Vec<AxisFallback>,
}

/// Everything a successful draw produces, committed to a canvas in one step
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    pub pixels: Vec<u8>,
    pub extent: ExtentBox,
    pub x_label: String,
    pub y_label: String,
    pub colorbar_label: Option<String>,
    pub warnings: Vec<AxisFallback>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Canvas {
    /// Create a blank (white) canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; (width as usize) * (height as usize) * 3],
            extent: None,
            x_label: None,
            y_label: None,
            colorbar_label: None,
            warnings: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB bytes, row-major, 3 bytes per pixel
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB value of the pixel at (x, y), with (0, 0) at the top left
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Extent of the last raster drawn, if any
    pub fn extent(&self) -> Option<ExtentBox> {
        self.extent
    }

    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    pub fn colorbar_label(&self) -> Option<&str> {
        self.colorbar_label.as_deref()
    }

    /// Axis fallbacks that occurred during the last draw
    pub fn warnings(&self) -> &[AxisFallback] {
        &self.warnings
    }

    /// True until something has been drawn
    pub fn is_blank(&self) -> bool {
        self.extent.is_none()
    }

    /// Reset to a blank white canvas of the same size
    pub fn clear(&mut self) {
        *self = Self::new(self.width, self.height);
    }

    pub(crate) fn commit(&mut self, frame: Frame) {
        debug_assert_eq!(frame.pixels.len(), self.pixels.len());
        self.pixels = frame.pixels;
        self.extent = Some(frame.extent);
        self.x_label = Some(frame.x_label);
        self.y_label = Some(frame.y_label);
        self.colorbar_label = frame.colorbar_label;
        self.warnings = frame.warnings;
    }

    /// Copy the pixels into an `image` buffer
    pub fn to_image(&self) -> Result<RgbImage> {
        image::ImageBuffer::from_vec(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| PlotError::backend("canvas buffer had unexpected size"))
    }

    /// Encode the canvas as PNG or JPEG bytes
    pub fn encode(&self, format: OutputFormat) -> Result<PlotBytes> {
        let encode_start = std::time::Instant::now();

        // Compressed output is usually a small fraction of the raw buffer
        let mut encoded = Vec::with_capacity(self.pixels.len() / 8);
        match format {
            OutputFormat::Png => PngEncoder::new(&mut encoded).write_image(
                &self.pixels,
                self.width,
                self.height,
                image::ExtendedColorType::Rgb8,
            )?,
            OutputFormat::Jpeg => JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
                .encode(
                    &self.pixels,
                    self.width,
                    self.height,
                    image::ExtendedColorType::Rgb8,
                )?,
        }

        tracing::debug!(
            "Encoded {}x{} canvas as {} in {:?} ({} bytes)",
            self.width,
            self.height,
            format,
            encode_start.elapsed(),
            encoded.len()
        );
        Ok(encoded)
    }
}
