//! # chromatic-rainbow
//!
//! A small container for time-series spectroscopy: one or more "fluxlike"
//! 2D arrays indexed by (wavelength, time), plus the wavelength and time
//! axes that describe them.
//!
//! The container is deliberately thin. It validates array shapes, converts
//! axis values between display units, and derives cell edges from cell
//! centers when no edges were stored. Visualization lives in
//! `chromatic-plots`.
//!
//! ```rust
//! use chromatic_rainbow::{AxisArrays, Rainbow, Unit};
//! use ndarray::Array2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let wavelength = AxisArrays::wavelength(vec![0.5, 0.6, 0.7], Unit::Micron);
//! let time = AxisArrays::time(vec![0.0, 0.1, 0.2, 0.3], Unit::Day);
//! let rainbow = Rainbow::new(wavelength, time)
//!     .with_fluxlike("flux", Array2::ones((3, 4)), "")?;
//! assert_eq!(rainbow.nwave(), 3);
//! # Ok(())
//! # }
//! ```

pub use axis::{AxisArrays, AxisDescriptor, Scale, edges_from_centers};
pub use error::{RainbowError, Result};
pub use rainbow::{FluxQuantity, Rainbow};
pub use units::{Dimension, Unit, convert, convert_all};

pub mod axis;
pub mod error;
pub mod rainbow;
pub mod units;

pub type QuantityName = String;
