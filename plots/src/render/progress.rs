/// Information about raster rendering progress
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressInfo {
    /// Pixel rows of the plotting area written so far
    pub rows_done: u32,
    /// Total pixel rows in the plotting area
    pub total_rows: u32,
    /// Progress percentage (0.0 to 100.0)
    pub percent: f32,
}

/// Callback function type for reporting plot rendering progress
///
/// The callback receives progress information and returns a result.
/// Errors from the callback are logged but do not stop rendering.
pub type ProgressCallback =
    Box<dyn FnMut(ProgressInfo) -> Result<(), Box<dyn std::error::Error + Send + Sync>>>;

/// Callback receiving non-fatal axis fallback notices
pub type WarningCallback = Box<dyn FnMut(&crate::fallback::AxisFallback)>;
