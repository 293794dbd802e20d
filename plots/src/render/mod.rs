pub mod canvas;
pub mod plotters_backend;
pub mod progress;

pub use canvas::{Canvas, OutputFormat};
pub use progress::{ProgressCallback, ProgressInfo, WarningCallback};

use crate::fallback::AxisFallback;

/// Configuration for plot rendering
///
/// This struct allows applications to inject their own progress reporting
/// and diagnostics without the library depending on specific frameworks.
#[derive(Default)]
pub struct RenderConfig {
    /// Optional progress callback for reporting rendering progress
    ///
    /// Called as rows of the raster are written, so long renders can drive
    /// a progress bar.
    pub progress: Option<ProgressCallback>,

    /// Optional callback for axis fallback warnings
    ///
    /// Fallbacks are always logged with `tracing::warn!`; this is the hook
    /// for callers that want to show them to a user.
    pub on_warning: Option<WarningCallback>,
}

impl RenderConfig {
    /// Create a new RenderConfig with no callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Call the progress callback if present
    pub fn report_progress(&mut self, info: ProgressInfo) {
        if let Some(ref mut callback) = self.progress {
            if let Err(e) = callback(info) {
                tracing::warn!("Failed to report progress: {}", e);
            }
        }
    }

    /// Log a fallback warning and pass it to the warning callback if present
    pub fn report_warning(&mut self, warning: &AxisFallback) {
        tracing::warn!("{}", warning);
        if let Some(ref mut callback) = self.on_warning {
            callback(warning);
        }
    }
}
