use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::error::{RainbowError, Result};
use crate::units::Unit;

/// Relative tolerance used when deciding whether center spacing is uniform
pub const UNIFORM_SPACING_RTOL: f64 = 1e-4;

/// How the centers of an axis are spaced
///
/// Only uniformly spaced axes (in linear or logarithmic space) can be drawn
/// with a physical extent; everything else is [`Scale::Unknown`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Scale {
    Linear,
    Log,
    #[strum(to_string = "?", serialize = "unknown")]
    Unknown,
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Unknown
    }
}

impl Scale {
    /// Guess the scale of an axis from its centers.
    ///
    /// Uniform differences give `Linear`, uniform ratios of strictly positive
    /// centers give `Log`, anything else (including fewer than two centers
    /// or non-finite values) is `Unknown`.
    pub fn infer(centers: &[f64]) -> Scale {
        if centers.len() < 2 || centers.iter().any(|c| !c.is_finite()) {
            return Scale::Unknown;
        }

        let steps: Vec<f64> = centers.iter().tuple_windows().map(|(a, b)| b - a).collect();
        if is_uniform(&steps) {
            return Scale::Linear;
        }

        if centers.iter().all(|&c| c > 0.0) {
            let log_steps: Vec<f64> = centers
                .iter()
                .tuple_windows()
                .map(|(a, b)| b.log10() - a.log10())
                .collect();
            if is_uniform(&log_steps) {
                return Scale::Log;
            }
        }

        Scale::Unknown
    }
}

fn is_uniform(steps: &[f64]) -> bool {
    let Some(&first) = steps.first() else {
        return false;
    };
    first != 0.0
        && steps
            .iter()
            .all(|s| (s - first).abs() <= UNIFORM_SPACING_RTOL * first.abs())
}

/// Derive cell edges from cell centers.
///
/// Interior edges sit halfway between neighbouring centers (in log10 space
/// for `Log` axes), and the outermost edges are extrapolated by half of the
/// first and last spacing. Returns `None` when there are fewer than two
/// centers, since a single center says nothing about cell width.
pub fn edges_from_centers(centers: &[f64], scale: Scale) -> Option<(Vec<f64>, Vec<f64>)> {
    if centers.len() < 2 {
        return None;
    }

    let in_log_space = scale == Scale::Log && centers.iter().all(|&c| c > 0.0);
    let values: Vec<f64> = if in_log_space {
        centers.iter().map(|c| c.log10()).collect()
    } else {
        centers.to_vec()
    };

    let n = values.len();
    let midpoints: Vec<f64> = values
        .iter()
        .tuple_windows()
        .map(|(a, b)| 0.5 * (a + b))
        .collect();
    let first = values[0] - 0.5 * (values[1] - values[0]);
    let last = values[n - 1] + 0.5 * (values[n - 1] - values[n - 2]);

    let mut lower = Vec::with_capacity(n);
    lower.push(first);
    lower.extend_from_slice(&midpoints);

    let mut upper = midpoints;
    upper.push(last);

    if in_log_space {
        lower.iter_mut().for_each(|v| *v = 10f64.powf(*v));
        upper.iter_mut().for_each(|v| *v = 10f64.powf(*v));
    }

    Some((lower, upper))
}

/// Stored values for one axis of a rainbow
///
/// Centers are always present. Edges are optional; when they are missing
/// they are derived on demand by [`AxisArrays::descriptor`] without
/// modifying the stored arrays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AxisArrays {
    /// Quantity name used in axis titles
    pub label: String,
    pub centers: Vec<f64>,
    pub lower: Option<Vec<f64>>,
    pub upper: Option<Vec<f64>>,
    /// Unit the centers and edges are stored in
    pub unit: Unit,
    pub scale: Scale,
}

impl AxisArrays {
    /// Create an axis from its centers, inferring the scale
    pub fn new(label: impl Into<String>, centers: Vec<f64>, unit: Unit) -> Self {
        let scale = Scale::infer(&centers);
        Self {
            label: label.into(),
            centers,
            lower: None,
            upper: None,
            unit,
            scale,
        }
    }

    pub fn wavelength(centers: Vec<f64>, unit: Unit) -> Self {
        Self::new("Wavelength", centers, unit)
    }

    pub fn time(centers: Vec<f64>, unit: Unit) -> Self {
        Self::new("Time", centers, unit)
    }

    /// Store explicit edges
    pub fn with_edges(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.lower = Some(lower);
        self.upper = Some(upper);
        self
    }

    /// Override the inferred scale
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Build the read-only view of this axis used for plotting.
    ///
    /// Stored edges are used as-is. Otherwise edges are derived from the
    /// centers; if that is impossible the descriptor carries no edges.
    ///
    /// # Errors
    /// Returns [`RainbowError::MissingCenters`] if the axis has no centers.
    pub fn descriptor(&self) -> Result<AxisDescriptor> {
        if self.centers.is_empty() {
            return Err(RainbowError::missing_centers(&self.label));
        }

        let (lower_edges, upper_edges) = match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => (lower.clone(), upper.clone()),
            _ => match edges_from_centers(&self.centers, self.scale) {
                Some((lower, upper)) => {
                    debug!(
                        "Derived {} {} edges from centers ({} scale)",
                        lower.len(),
                        self.label.to_lowercase(),
                        self.scale
                    );
                    (lower, upper)
                }
                None => {
                    debug!(
                        "Cannot derive {} edges from {} center(s)",
                        self.label.to_lowercase(),
                        self.centers.len()
                    );
                    (Vec::new(), Vec::new())
                }
            },
        };

        Ok(AxisDescriptor {
            label: self.label.clone(),
            scale: self.scale,
            lower_edges,
            upper_edges,
            count: self.centers.len(),
            unit: self.unit,
        })
    }
}

/// One physical axis of a displayed grid
///
/// Edge sequences may be empty when the axis has no usable boundaries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AxisDescriptor {
    pub label: String,
    pub scale: Scale,
    pub lower_edges: Vec<f64>,
    pub upper_edges: Vec<f64>,
    /// Number of cells along the axis
    pub count: usize,
    pub unit: Unit,
}

impl AxisDescriptor {
    /// Create a descriptor without edges
    pub fn new(label: impl Into<String>, scale: Scale, count: usize, unit: Unit) -> Self {
        Self {
            label: label.into(),
            scale,
            lower_edges: Vec::new(),
            upper_edges: Vec::new(),
            count,
            unit,
        }
    }

    pub fn with_edges(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.lower_edges = lower;
        self.upper_edges = upper;
        self
    }

    pub fn has_edges(&self) -> bool {
        !self.lower_edges.is_empty() && !self.upper_edges.is_empty()
    }

    /// Number of edge pairs available (the shorter of the two sequences)
    pub fn edge_count(&self) -> usize {
        self.lower_edges.len().min(self.upper_edges.len())
    }
}
