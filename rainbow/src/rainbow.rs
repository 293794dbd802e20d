use ndarray::Array2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::QuantityName;
use crate::axis::{AxisArrays, AxisDescriptor};
use crate::error::{RainbowError, Result};

/// A fluxlike array together with the unit string used to label it
///
/// The array is indexed `[wavelength, time]`. The unit is free-form text
/// (`"erg/s/cm²/Å"`, `"electrons"`, or empty for dimensionless quantities),
/// since it is only ever displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FluxQuantity {
    pub values: Array2<f64>,
    pub unit: String,
}

impl FluxQuantity {
    pub fn new(values: Array2<f64>, unit: impl Into<String>) -> Self {
        Self {
            values,
            unit: unit.into(),
        }
    }

    /// Finite (min, max) of the values, or `None` if nothing is finite
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

pub type FluxlikeMap = FxHashMap<QuantityName, FluxQuantity>;

/// Time-series spectroscopy data: fluxlike arrays on a (wavelength, time) grid
///
/// Rows are wavelengths and columns are times, so every fluxlike array has
/// shape `(nwave, ntime)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rainbow {
    pub wavelength: AxisArrays,
    pub time: AxisArrays,
    fluxlike: FluxlikeMap,
}

impl Rainbow {
    /// Create an empty rainbow on the given axes
    pub fn new(wavelength: AxisArrays, time: AxisArrays) -> Self {
        Self {
            wavelength,
            time,
            fluxlike: FluxlikeMap::default(),
        }
    }

    /// Add (or replace) a fluxlike quantity.
    ///
    /// # Errors
    /// Returns [`RainbowError::ShapeMismatch`] if `values` is not `(nwave, ntime)`.
    pub fn with_fluxlike(
        mut self,
        name: impl Into<String>,
        values: Array2<f64>,
        unit: impl Into<String>,
    ) -> Result<Self> {
        self.insert_fluxlike(name, values, unit)?;
        Ok(self)
    }

    /// In-place variant of [`Rainbow::with_fluxlike`]
    pub fn insert_fluxlike(
        &mut self,
        name: impl Into<String>,
        values: Array2<f64>,
        unit: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        let expected = self.shape();
        let actual = values.dim();
        if actual != expected {
            return Err(RainbowError::ShapeMismatch {
                name,
                expected,
                actual,
            });
        }
        self.fluxlike.insert(name, FluxQuantity::new(values, unit));
        Ok(())
    }

    pub fn nwave(&self) -> usize {
        self.wavelength.len()
    }

    pub fn ntime(&self) -> usize {
        self.time.len()
    }

    /// (nwave, ntime)
    pub fn shape(&self) -> (usize, usize) {
        (self.nwave(), self.ntime())
    }

    /// Look up a fluxlike quantity by name.
    ///
    /// # Errors
    /// Returns [`RainbowError::UnknownQuantity`] listing the available names.
    pub fn get(&self, name: &str) -> Result<&FluxQuantity> {
        self.fluxlike
            .get(name)
            .ok_or_else(|| RainbowError::unknown_quantity(name, self.fluxlike.keys().cloned()))
    }

    /// Names of all stored fluxlike quantities, sorted
    pub fn quantity_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fluxlike.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Descriptor for the wavelength (row) axis, with edges derived if needed
    pub fn wavelength_descriptor(&self) -> Result<AxisDescriptor> {
        self.wavelength.descriptor()
    }

    /// Descriptor for the time (column) axis, with edges derived if needed
    pub fn time_descriptor(&self) -> Result<AxisDescriptor> {
        self.time.descriptor()
    }
}
