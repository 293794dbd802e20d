//! Error types for plotting.
//!
//! Fatal conditions abort a render call and surface as `PlotError`. Axis
//! fallbacks are not errors; they are reported through
//! [`crate::render::RenderConfig`] and recorded on the canvas.

use chromatic_rainbow::RainbowError;
use thiserror::Error;

use crate::extent::AxisRole;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Unit conversion, unknown quantity, or missing axis centers
    #[error(transparent)]
    Rainbow(#[from] RainbowError),

    /// An axis resolved to coincident or non-finite bounds
    #[error("Degenerate {role} axis: extent ({near}, {far}) has no width")]
    DegenerateAxis { role: AxisRole, near: f64, far: f64 },

    /// A styling option that could not be interpreted
    #[error("Invalid style option '{key}': {message}")]
    InvalidStyle { key: String, message: String },

    /// The canvas leaves no room for a plotting area
    #[error("Canvas of {width}x{height} pixels is too small for the requested layout")]
    CanvasTooSmall { width: u32, height: u32 },

    /// Failures reported by the plotters drawing backend
    #[error("Drawing backend error: {message}")]
    Backend { message: String },

    /// Image encoding failures
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

impl PlotError {
    pub fn degenerate_axis(role: AxisRole, near: f64, far: f64) -> Self {
        Self::DegenerateAxis { role, near, far }
    }

    pub fn invalid_style(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStyle {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Wrap any backend error by its display text
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend {
            message: err.to_string(),
        }
    }

    /// True for the fatal "display unit has the wrong dimension" case
    pub fn is_unit_conversion(&self) -> bool {
        matches!(self, Self::Rainbow(RainbowError::UnitConversion { .. }))
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
