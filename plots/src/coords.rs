//! Image coordinate mapping
//!
//! An [`ExtentBox`] places the raster in axis coordinates using the
//! `{left, right, bottom, top}` convention with the first array row drawn
//! at the top. The ordering inside each pair encodes orientation, so
//! `bottom > top` is normal for a wavelength axis that increases downward.

use std::ops::Range;

use crate::error::{PlotError, Result};
use crate::extent::AxisRole;

/// The rectangle, in display coordinates, that the raster is stretched over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentBox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Combine resolved `(near, far)` pairs into an extent box.
///
/// Columns map to `left/right`, rows to `bottom/top`.
///
/// # Errors
/// [`PlotError::DegenerateAxis`] if either pair has no width or is not finite.
pub fn build_extent(row: (f64, f64), column: (f64, f64)) -> Result<ExtentBox> {
    check_span(AxisRole::Row, row)?;
    check_span(AxisRole::Column, column)?;
    Ok(ExtentBox {
        left: column.0,
        right: column.1,
        bottom: row.0,
        top: row.1,
    })
}

fn check_span(role: AxisRole, (near, far): (f64, f64)) -> Result<()> {
    if !near.is_finite() || !far.is_finite() || near == far {
        return Err(PlotError::degenerate_axis(role, near, far));
    }
    Ok(())
}

impl ExtentBox {
    /// `[left, right, bottom, top]`
    pub fn as_array(&self) -> [f64; 4] {
        [self.left, self.right, self.bottom, self.top]
    }

    /// Horizontal span, from the left pixel edge to the right
    pub fn x_span(&self) -> AxisSpan {
        AxisSpan::new(self.left, self.right)
    }

    /// Vertical span, from the bottom pixel edge to the top
    pub fn y_span(&self) -> AxisSpan {
        AxisSpan::new(self.bottom, self.top)
    }

    /// Fractional column index at display coordinate `x`.
    ///
    /// Column `j` is centered on `j`; the left edge of the box is `-0.5`.
    pub fn column_index_at(&self, x: f64, ncols: usize) -> f64 {
        (x - self.left) / (self.right - self.left) * ncols as f64 - 0.5
    }

    /// Fractional row index at display coordinate `y`.
    ///
    /// Row 0 is at the top of the box, so the top edge is `-0.5`.
    pub fn row_index_at(&self, y: f64, nrows: usize) -> f64 {
        (y - self.top) / (self.bottom - self.top) * nrows as f64 - 0.5
    }
}

/// One axis of the extent box as seen by the drawing backend
///
/// `start` is drawn at the low pixel edge (left or bottom) and `end` at the
/// high one. Plot backends want increasing ranges, so reversed spans are
/// charted on negated coordinates and flipped back when labelling ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpan {
    pub start: f64,
    pub end: f64,
}

impl AxisSpan {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Increasing range handed to the chart builder
    pub fn chart_range(&self) -> Range<f64> {
        if self.is_reversed() {
            -self.start..-self.end
        } else {
            self.start..self.end
        }
    }

    /// Map a chart coordinate back to the value shown on the axis
    pub fn display_value(&self, chart_value: f64) -> f64 {
        if self.is_reversed() {
            -chart_value
        } else {
            chart_value
        }
    }

    /// Display value at `fraction` of the way from `start` to `end`
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.start + fraction * (self.end - self.start)
    }
}

/// Format a tick value compactly.
///
/// Plain decimals for everyday magnitudes, scientific notation otherwise.
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        return "0".to_string();
    }
    if (1e-3..1e5).contains(&magnitude) {
        let text = format!("{:.4}", value);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        if text == "-0" {
            "0".to_string()
        } else {
            text.to_string()
        }
    } else {
        format!("{:.1e}", value)
    }
}
