use crate::error::Result;
use crate::options::PlotOptions;
use crate::render::{Canvas, RenderConfig};

/// Trait for plot types
///
/// This trait defines the interface that all plot types must implement.
/// Each plot type specifies its own options type and data type. Drawing
/// always targets an explicit [`Canvas`]; there is no ambient "current"
/// drawing target.
///
/// # Example
///
/// ```rust
/// use chromatic_plots::error::Result;
/// use chromatic_plots::options::{BasePlotOptions, PlotOptions};
/// use chromatic_plots::plots::Plot;
/// use chromatic_plots::render::{Canvas, RenderConfig};
///
/// struct BlankOptions {
///     base: BasePlotOptions,
/// }
///
/// impl PlotOptions for BlankOptions {
///     fn base(&self) -> &BasePlotOptions { &self.base }
/// }
///
/// struct Blank;
///
/// impl Plot for Blank {
///     type Options = BlankOptions;
///     type Data = [f64];
///
///     fn draw<'c>(
///         &self,
///         _data: &Self::Data,
///         _options: &Self::Options,
///         canvas: &'c mut Canvas,
///         _render_config: &mut RenderConfig,
///     ) -> Result<&'c mut Canvas> {
///         Ok(canvas)
///     }
/// }
///
/// let options = BlankOptions { base: BasePlotOptions::default() };
/// let canvas = Blank.render(&[], &options, &mut RenderConfig::default()).unwrap();
/// assert!(canvas.is_blank());
/// ```
pub trait Plot {
    /// The options type for this plot
    type Options: PlotOptions;

    /// The data type this plot accepts
    type Data: ?Sized;

    /// Draw onto a caller-supplied canvas
    ///
    /// # Arguments
    ///
    /// * `data` - The data to plot
    /// * `options` - Plot-specific options
    /// * `canvas` - The drawing target; left untouched if an error is returned
    /// * `render_config` - Rendering configuration (progress and warning callbacks)
    ///
    /// # Returns
    ///
    /// The same canvas that was passed in
    fn draw<'c>(
        &self,
        data: &Self::Data,
        options: &Self::Options,
        canvas: &'c mut Canvas,
        render_config: &mut RenderConfig,
    ) -> Result<&'c mut Canvas>;

    /// Draw onto a new canvas sized by the base options
    fn render(
        &self,
        data: &Self::Data,
        options: &Self::Options,
        render_config: &mut RenderConfig,
    ) -> Result<Canvas> {
        let base = options.base();
        let mut canvas = Canvas::new(base.width, base.height);
        self.draw(data, options, &mut canvas, render_config)?;
        Ok(canvas)
    }
}
