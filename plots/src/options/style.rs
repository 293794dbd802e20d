//! Styling passthrough for imshow
//!
//! [`ImshowStyle`] holds the one styling decision the imshow pipeline makes
//! itself (the interpolation default). Everything else belongs to the
//! raster backend's own [`RasterStyle`]. Free-form `key = value` options are
//! split between the two by [`ImshowStyle::from_pairs`].

use derive_builder::Builder;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::{debug, warn};

use crate::colormap::ColorMaps;
use crate::error::{PlotError, Result};

/// How raster cells are sampled onto screen pixels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Interpolation {
    /// Each pixel takes the value of the cell it falls in
    Nearest,
    /// Blend the four surrounding cell centers
    Bilinear,
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::Nearest
    }
}

/// Options interpreted by the raster backend
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct RasterStyle {
    /// Color map for cell values
    #[builder(default = "ColorMaps::Viridis")]
    pub colormap: ColorMaps,

    /// Value mapped to the bottom of the color map (data minimum if unset)
    pub vmin: Option<f64>,

    /// Value mapped to the top of the color map (data maximum if unset)
    pub vmax: Option<f64>,

    /// Opacity of the raster over the white background, 0.0 to 1.0
    pub alpha: Option<f64>,

    /// Options the backend does not interpret, kept verbatim
    pub extra: FxHashMap<String, String>,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            colormap: ColorMaps::Viridis,
            vmin: None,
            vmax: None,
            alpha: None,
            extra: FxHashMap::default(),
        }
    }
}

impl RasterStyle {
    pub fn new() -> RasterStyleBuilder {
        RasterStyleBuilder::default()
    }

    /// Apply one `key = value` option.
    ///
    /// Recognized keys are `cmap`, `vmin`, `vmax` and `alpha`; anything else
    /// is stored in `extra`.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cmap" | "colormap" => {
                self.colormap = value
                    .parse()
                    .map_err(|_| PlotError::invalid_style(key, format!("unknown color map '{value}'")))?;
            }
            "vmin" => self.vmin = Some(parse_finite(key, value)?),
            "vmax" => self.vmax = Some(parse_finite(key, value)?),
            "alpha" => {
                let alpha = parse_float(key, value)?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(PlotError::invalid_style(key, "must be between 0 and 1"));
                }
                self.alpha = Some(alpha);
            }
            _ => {
                debug!("Raster style option '{key}' is not used by the plotters backend");
                self.extra.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    /// Resolve the (low, high) values spanned by the color map.
    ///
    /// Unset limits come from `data_range`; with no finite data the range
    /// is `(0, 1)`. Both limits and their span are always finite: bounds
    /// are clamped to `±MAX_COLOR_LIMIT`, and a zero-width range is widened
    /// by half a unit (or a relative pad for large values) each way.
    pub fn color_limits(&self, data_range: Option<(f64, f64)>) -> (f64, f64) {
        let (data_lo, data_hi) = data_range
            .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
            .unwrap_or((0.0, 1.0));
        let lo = self.vmin.filter(|v| v.is_finite()).unwrap_or(data_lo);
        let hi = self.vmax.filter(|v| v.is_finite()).unwrap_or(data_hi);

        let (lo, hi) = if lo.abs() <= MAX_COLOR_LIMIT && hi.abs() <= MAX_COLOR_LIMIT {
            (lo, hi)
        } else {
            warn!("Color limits ({lo}, {hi}) are too wide to draw; clamping to ±{MAX_COLOR_LIMIT:e}");
            (
                lo.clamp(-MAX_COLOR_LIMIT, MAX_COLOR_LIMIT),
                hi.clamp(-MAX_COLOR_LIMIT, MAX_COLOR_LIMIT),
            )
        };

        if lo == hi {
            let pad = 0.5f64.max(lo.abs() * 1e-3);
            (lo - pad, hi + pad)
        } else {
            (lo, hi)
        }
    }
}

/// Largest magnitude a color limit may take
pub const MAX_COLOR_LIMIT: f64 = 1e300;

fn parse_finite(key: &str, value: &str) -> Result<f64> {
    let parsed = parse_float(key, value)?;
    if !parsed.is_finite() {
        return Err(PlotError::invalid_style(key, "must be finite"));
    }
    Ok(parsed)
}

fn parse_float(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| PlotError::invalid_style(key, e.to_string()))
}

/// Styling for imshow: the interpolation default plus backend options
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct ImshowStyle {
    /// Pixel sampling, nearest unless overridden
    #[builder(default = "Interpolation::Nearest")]
    pub interpolation: Interpolation,

    /// Options forwarded to the raster backend
    #[builder(default)]
    pub raster: RasterStyle,
}

impl ImshowStyle {
    pub fn new() -> ImshowStyleBuilder {
        ImshowStyleBuilder::default()
    }

    /// Build a style from free-form `key = value` pairs.
    ///
    /// `interpolation` is read here; every other key goes to
    /// [`RasterStyle::apply`].
    ///
    /// ```rust
    /// use chromatic_plots::options::{ImshowStyle, Interpolation};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let style = ImshowStyle::from_pairs([("cmap", "magma"), ("interpolation", "bilinear")])?;
    /// assert_eq!(style.interpolation, Interpolation::Bilinear);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut style = ImshowStyle::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key == "interpolation" {
                style.interpolation = value.parse().map_err(|_| {
                    PlotError::invalid_style(key, format!("unknown interpolation '{value}'"))
                })?;
            } else {
                style.raster.apply(key, value)?;
            }
        }
        Ok(style)
    }
}
