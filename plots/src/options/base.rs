use derive_builder::Builder;

/// Base plot options containing layout and display settings
///
/// These options are common to all plot types and control the overall
/// layout of the plot. `width` and `height` size the canvas that is created
/// when the caller does not supply one.
///
/// # Example
///
/// ```rust
/// use chromatic_plots::options::BasePlotOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let base = BasePlotOptions::new()
///     .width(1024u32)
///     .height(512u32)
///     .title("WASP-39b transit")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct BasePlotOptions {
    /// Default canvas width in pixels
    #[builder(default = "800")]
    pub width: u32,

    /// Default canvas height in pixels
    #[builder(default = "600")]
    pub height: u32,

    /// Margin around the plot area in pixels
    #[builder(default = "10")]
    pub margin: u32,

    /// Size of the x-axis label area in pixels
    #[builder(default = "50")]
    pub x_label_area_size: u32,

    /// Size of the y-axis label area in pixels
    #[builder(default = "70")]
    pub y_label_area_size: u32,

    /// Width reserved for the colorbar (including its labels) in pixels
    #[builder(default = "110")]
    pub colorbar_width: u32,

    /// Plot title; empty for none
    #[builder(default = "String::new()")]
    pub title: String,
}

impl Default for BasePlotOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 10,
            x_label_area_size: 50,
            y_label_area_size: 70,
            colorbar_width: 110,
            title: String::new(),
        }
    }
}

impl BasePlotOptions {
    /// Create a new builder for BasePlotOptions
    pub fn new() -> BasePlotOptionsBuilder {
        BasePlotOptionsBuilder::default()
    }
}
