use colorgrad::Gradient;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Color map options for imshow rasters
///
/// All maps come from `colorgrad` presets:
///
/// - **Perceptually uniform sequential**: Viridis, Plasma, Inferno, Magma,
///   Cividis, Turbo (good defaults for flux; colorblind-friendly)
/// - **Single hue**: Greys, Blues, Reds (handy for printing)
/// - **Diverging**: Spectral, RdBu (useful for residuals around zero)
/// - **Traditional**: Rainbow, Sinebow (colorful but less perceptually uniform)
///
/// Names parse case-insensitively, e.g. `"viridis".parse::<ColorMaps>()`.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMaps {
    /// Viridis - perceptually uniform, colorblind-friendly (default)
    Viridis,
    /// Plasma - perceptually uniform, high contrast
    Plasma,
    /// Inferno - perceptually uniform, dark background friendly
    Inferno,
    /// Magma - perceptually uniform, dark to bright
    Magma,
    /// Cividis - colorblind-friendly, optimized for printing
    Cividis,
    /// Turbo - vibrant rainbow-like map with smooth lightness
    Turbo,
    /// Greys - white to black
    Greys,
    /// Blues - white to dark blue
    Blues,
    /// Reds - white to dark red
    Reds,
    /// Spectral - diverging
    Spectral,
    /// RdBu - diverging red/blue
    #[strum(serialize = "rdbu")]
    RdBu,
    /// Rainbow - traditional rainbow colors (use with caution)
    Rainbow,
    /// Sinebow - cyclic rainbow
    Sinebow,
}

impl Default for ColorMaps {
    fn default() -> Self {
        ColorMaps::Viridis
    }
}

/// Number of entries in a lookup table built by [`ColorMaps::lookup_table`]
pub const LUT_SIZE: usize = 256;

impl ColorMaps {
    /// Map a normalized value (0.0 to 1.0) to an RGB color
    ///
    /// Values outside the range are clamped.
    pub fn map(&self, value: f32) -> RGBColor {
        let t = value.clamp(0.0, 1.0);
        let color = match self {
            ColorMaps::Viridis => colorgrad::preset::viridis().at(t),
            ColorMaps::Plasma => colorgrad::preset::plasma().at(t),
            ColorMaps::Inferno => colorgrad::preset::inferno().at(t),
            ColorMaps::Magma => colorgrad::preset::magma().at(t),
            ColorMaps::Cividis => colorgrad::preset::cividis().at(t),
            ColorMaps::Turbo => colorgrad::preset::turbo().at(t),
            ColorMaps::Greys => colorgrad::preset::greys().at(t),
            ColorMaps::Blues => colorgrad::preset::blues().at(t),
            ColorMaps::Reds => colorgrad::preset::reds().at(t),
            ColorMaps::Spectral => colorgrad::preset::spectral().at(t),
            ColorMaps::RdBu => colorgrad::preset::rd_bu().at(t),
            ColorMaps::Rainbow => colorgrad::preset::rainbow().at(t),
            ColorMaps::Sinebow => colorgrad::preset::sinebow().at(t),
        };
        to_rgb(&color)
    }

    /// Sample the map at `size` evenly spaced points from 0.0 to 1.0
    ///
    /// Building a gradient is comparatively expensive, so rasterization
    /// looks colors up in a table instead of calling [`ColorMaps::map`]
    /// per pixel.
    pub fn lookup_table(&self, size: usize) -> Vec<RGBColor> {
        match size {
            0 => Vec::new(),
            1 => vec![self.map(0.0)],
            _ => (0..size)
                .map(|i| self.map(i as f32 / (size - 1) as f32))
                .collect(),
        }
    }
}

fn to_rgb(color: &colorgrad::Color) -> RGBColor {
    // colorgrad channels are f32 in [0.0, 1.0]
    let [r, g, b, _] = color.to_rgba8();
    RGBColor(r, g, b)
}
