//! # chromatic-plots
//!
//! Quick-look images of time-series spectra.
//!
//! ## Overview
//!
//! The main entry point draws one fluxlike quantity of a
//! [`chromatic_rainbow::Rainbow`] as an image with wavelength down the
//! rows and time across the columns. Each axis is labelled in the display
//! unit you ask for when its cells are uniform in linear or log space, and
//! by cell index (with a warning) when they are not.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chromatic_plots::{ImshowOptions, OutputFormat, imshow};
//! use chromatic_rainbow::{AxisArrays, Rainbow, Unit};
//! use ndarray::Array2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let wavelength = AxisArrays::wavelength(vec![500.0, 600.0, 700.0], Unit::Nanometer);
//! let time = AxisArrays::time(vec![0.0, 1.0, 2.0, 3.0], Unit::Hour);
//! let rainbow = Rainbow::new(wavelength, time)
//!     .with_fluxlike("flux", Array2::ones((3, 4)), "")?;
//!
//! let options = ImshowOptions::new()
//!     .w_unit(Unit::Micron)
//!     .t_unit(Unit::Hour)
//!     .build()?;
//! let canvas = imshow(&rainbow, &options)?;
//! let png = canvas.encode(OutputFormat::Png)?;
//! assert!(!png.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `extent`: resolve one axis into display-space bounds and a title
//! - `fallback`: index axes for data that cannot be drawn physically
//! - `coords`: combine two resolved axes into an image extent box
//! - `options`: plot configuration types using the builder pattern
//! - `plots`: plot implementations (currently [`Imshow`])
//! - `render`: the drawing canvas, the plotters backend and callbacks
//! - `colormap`: color map presets

pub mod colormap;
pub mod coords;
pub mod error;
pub mod extent;
pub mod fallback;
pub mod options;
pub mod plots;
pub mod render;


// Re-export commonly used types
pub use colormap::ColorMaps;
pub use coords::{ExtentBox, build_extent};
pub use error::{PlotError, Result};
pub use extent::{AxisExtent, AxisRole, Resolution, resolve};
pub use fallback::{AxisFallback, FallbackReason, fallback_extent};
pub use options::{
    Aspect, BasePlotOptions, ImshowOptions, ImshowStyle, Interpolation, PlotOptions, RasterStyle,
};
pub use plots::{Imshow, Plot, imshow};
pub use render::{Canvas, OutputFormat, ProgressCallback, ProgressInfo, RenderConfig};

// Type aliases
pub type PlotBytes = Vec<u8>;
