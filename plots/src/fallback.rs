//! Index-axis fallback
//!
//! When an axis cannot be drawn with physical coordinates, the image is
//! stretched over cell indices instead: index `i` is centered on coordinate
//! `i`, with half a cell of padding at either end. The orientation follows
//! the same row/column convention as physical extents.

use chromatic_rainbow::{AxisDescriptor, Scale};
use std::fmt;
use thiserror::Error;

use crate::extent::{AxisExtent, AxisRole};

/// Why an axis could not be resolved physically
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    #[error("the axis is neither linearly nor logarithmically uniform")]
    UnsupportedScale,
    #[error("no edges are defined")]
    MissingEdges,
    #[error("{lower} lower and {upper} upper edges do not match the number of centers")]
    EdgeCountMismatch { lower: usize, upper: usize },
    #[error("some edges are not finite")]
    NonFinite,
    #[error("the edges are not strictly increasing")]
    NonMonotonic,
    #[error("a logarithmic axis has edges that are zero or negative")]
    NonPositiveLog,
}

/// `(near, far)` bounds of an index axis with `count` cells
pub fn fallback_extent(count: usize, role: AxisRole) -> (f64, f64) {
    role.orient(-0.5, count as f64 - 0.5)
}

/// A non-fatal notice that an axis was replaced by its index
///
/// Carries everything needed to explain the fallback to a user: which axis,
/// its declared scale, how many centers and edges it had, and why it was
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFallback {
    pub axis: String,
    pub role: AxisRole,
    pub scale: Scale,
    pub centers: usize,
    pub edges: usize,
    pub reason: FallbackReason,
}

impl AxisFallback {
    pub fn new(descriptor: &AxisDescriptor, role: AxisRole, reason: FallbackReason) -> Self {
        Self {
            axis: descriptor.label.clone(),
            role,
            scale: descriptor.scale,
            centers: descriptor.count,
            edges: descriptor.edge_count(),
            reason,
        }
    }

    /// The index axis that replaces the physical one
    pub fn index_extent(&self) -> AxisExtent {
        let (near, far) = fallback_extent(self.centers, self.role);
        AxisExtent {
            near,
            far,
            label: format!("{} Index", self.axis),
        }
    }

    fn remedy(&self) -> String {
        let name = self.axis.to_lowercase();
        match self.role {
            AxisRole::Row => format!(
                "bin your {name}s onto a more uniform grid, with `bin(R=...)` for \
                 logarithmic {name}s or `bin(dw=...)` for linear {name}s"
            ),
            AxisRole::Column => format!(
                "bin your {name}s onto a more uniform grid with `bin(dt=...)` for linear {name}s"
            ),
        }
    }
}

impl fmt::Display for AxisFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.axis.to_lowercase();
        write!(
            f,
            "The {name} scale is '{}', with {} {name} centers and {} {name} edges defined; \
             {}. Using the {name} index as the {name} axis instead. \
             For a real {name} axis, {}.",
            self.scale,
            self.centers,
            self.edges,
            self.reason,
            self.remedy()
        )
    }
}
