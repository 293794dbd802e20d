use chromatic_rainbow::Unit;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::Result;
use crate::options::{BasePlotOptions, ImshowStyle, PlotOptions};

/// Aspect ratio policy for the raster
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Aspect {
    /// Fill the whole plotting area
    Auto,
    /// One display unit spans the same number of pixels on both axes
    Equal,
}

impl Default for Aspect {
    fn default() -> Self {
        Aspect::Auto
    }
}

/// Options for imshow plots
///
/// Selects which fluxlike quantity to draw, the display units for the
/// wavelength (row) and time (column) axes, and presentation settings.
///
/// # Example
///
/// ```rust
/// use chromatic_plots::options::{Aspect, ImshowOptions};
/// use chromatic_rainbow::Unit;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ImshowOptions::new()
///     .quantity("model")
///     .w_unit(Unit::Nanometer)
///     .t_unit(Unit::Hour)
///     .aspect(Aspect::Auto)
///     .colorbar(false)
///     .build()?;
/// assert_eq!(options.quantity, "model");
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct ImshowOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// Name of the fluxlike quantity to draw
    #[builder(default = "\"flux\".to_string()")]
    pub quantity: String,

    /// Display unit for the wavelength axis
    #[builder(default = "Unit::Micron")]
    pub w_unit: Unit,

    /// Display unit for the time axis
    #[builder(default = "Unit::Day")]
    pub t_unit: Unit,

    /// Draw a colorbar labelled with the quantity's unit
    #[builder(default = "true")]
    pub colorbar: bool,

    /// Aspect ratio policy
    #[builder(default = "Aspect::Auto")]
    pub aspect: Aspect,

    /// Interpolation and raster styling
    #[builder(default)]
    pub style: ImshowStyle,
}

impl Default for ImshowOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            quantity: "flux".to_string(),
            w_unit: Unit::Micron,
            t_unit: Unit::Day,
            colorbar: true,
            aspect: Aspect::Auto,
            style: ImshowStyle::default(),
        }
    }
}

impl PlotOptions for ImshowOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl ImshowOptions {
    /// Create a new builder for ImshowOptions
    pub fn new() -> ImshowOptionsBuilder {
        ImshowOptionsBuilder::default()
    }
}

impl ImshowOptionsBuilder {
    /// Set both display units from strings such as `"nm"` and `"hour"`
    pub fn units(&mut self, w_unit: &str, t_unit: &str) -> Result<&mut Self> {
        self.w_unit = Some(Unit::parse(w_unit)?);
        self.t_unit = Some(Unit::parse(t_unit)?);
        Ok(self)
    }
}
