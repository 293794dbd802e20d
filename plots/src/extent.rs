//! Axis extent resolution
//!
//! Turns an [`AxisDescriptor`] into the pair of display-space bounds an
//! image should span along that axis. Rows (wavelength-like) are drawn
//! with the first row at the top, so their bounds are ordered
//! `(larger, smaller)`; columns (time-like) run left to right as
//! `(smaller, larger)`.
//!
//! Axes that cannot be represented uniformly resolve to a
//! [`FallbackReason`] instead of a physical extent. Resolution is pure: it
//! never logs or warns, the caller decides what to do with the reason.

use chromatic_rainbow::{AxisDescriptor, Scale, Unit, convert_all};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::Result;
use crate::fallback::FallbackReason;

/// Which image axis a physical axis is displayed along
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AxisRole {
    /// Wavelength-like, rows of the array, first row at the top
    Row,
    /// Time-like, columns of the array, first column at the left
    Column,
}

impl AxisRole {
    /// Order a `(smaller, larger)` pair into `(near, far)` for this role
    pub fn orient(&self, lo: f64, hi: f64) -> (f64, f64) {
        match self {
            AxisRole::Row => (hi, lo),
            AxisRole::Column => (lo, hi),
        }
    }
}

/// A resolved axis: display-space bounds plus the axis title
#[derive(Debug, Clone, PartialEq)]
pub struct AxisExtent {
    pub near: f64,
    pub far: f64,
    pub label: String,
}

impl AxisExtent {
    pub fn bounds(&self) -> (f64, f64) {
        (self.near, self.far)
    }
}

/// Either a physical extent, or the reason the axis must use indices
pub type Resolution = std::result::Result<AxisExtent, FallbackReason>;

/// Resolve one axis into display-space bounds.
///
/// # Errors
/// Returns a unit conversion error if `target_unit` measures a different
/// dimension than the axis. This is checked first, so it is raised even
/// for axes that would otherwise fall back.
///
/// # Returns
/// `Ok(Ok(extent))` for a physical axis, `Ok(Err(reason))` when the axis
/// has to fall back to an index axis.
pub fn resolve(
    descriptor: &AxisDescriptor,
    target_unit: Unit,
    role: AxisRole,
) -> Result<Resolution> {
    descriptor.unit.ensure_convertible(target_unit)?;

    if descriptor.scale == Scale::Unknown {
        return Ok(Err(FallbackReason::UnsupportedScale));
    }
    if !descriptor.has_edges() {
        return Ok(Err(FallbackReason::MissingEdges));
    }
    if descriptor.lower_edges.len() != descriptor.count
        || descriptor.upper_edges.len() != descriptor.count
    {
        return Ok(Err(FallbackReason::EdgeCountMismatch {
            lower: descriptor.lower_edges.len(),
            upper: descriptor.upper_edges.len(),
        }));
    }

    let lower = convert_all(&descriptor.lower_edges, descriptor.unit, target_unit)?;
    let upper = convert_all(&descriptor.upper_edges, descriptor.unit, target_unit)?;

    if lower.iter().chain(upper.iter()).any(|v| !v.is_finite()) {
        return Ok(Err(FallbackReason::NonFinite));
    }
    if !strictly_increasing(&lower) || !strictly_increasing(&upper) {
        return Ok(Err(FallbackReason::NonMonotonic));
    }

    // Both sequences are non-empty and of length `count` here
    let lo = lower[0];
    let hi = upper[upper.len() - 1];
    if hi < lo {
        return Ok(Err(FallbackReason::NonMonotonic));
    }

    let (lo, hi, label) = match descriptor.scale {
        Scale::Linear => (lo, hi, format!("{} ({})", descriptor.label, target_unit)),
        Scale::Log => {
            if lower.iter().chain(upper.iter()).any(|&v| v <= 0.0) {
                return Ok(Err(FallbackReason::NonPositiveLog));
            }
            (
                lo.log10(),
                hi.log10(),
                format!("log10[{}/({})]", descriptor.label, target_unit),
            )
        }
        Scale::Unknown => return Ok(Err(FallbackReason::UnsupportedScale)),
    };

    let (near, far) = role.orient(lo, hi);
    Ok(Ok(AxisExtent { near, far, label }))
}

fn strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
