pub mod base;
pub mod imshow;
pub mod style;

pub use base::{BasePlotOptions, BasePlotOptionsBuilder};
pub use imshow::{Aspect, ImshowOptions, ImshowOptionsBuilder};
pub use style::{ImshowStyle, ImshowStyleBuilder, Interpolation, RasterStyle, RasterStyleBuilder};

/// Trait for plot options types
///
/// All plot-specific options structs should implement this trait to provide
/// access to the base options.
pub trait PlotOptions {
    /// Get a reference to the base plot options
    fn base(&self) -> &BasePlotOptions;
}
