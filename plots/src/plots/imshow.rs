use chromatic_rainbow::{AxisDescriptor, Rainbow, Unit};
use tracing::{debug, info};

use crate::coords::build_extent;
use crate::error::Result;
use crate::extent::{AxisExtent, AxisRole, resolve};
use crate::fallback::AxisFallback;
use crate::options::{ImshowOptions, PlotOptions};
use crate::plots::traits::Plot;
use crate::render::canvas::Frame;
use crate::render::plotters_backend::{RasterRequest, render_raster};
use crate::render::{Canvas, RenderConfig};

/// Wavelength x time image of one fluxlike quantity
///
/// Rows of the quantity are wavelengths, drawn top to bottom; columns are
/// times, drawn left to right. Each axis is labelled in physical units when
/// its edges are uniform in linear or log space, and by cell index otherwise.
///
/// # Example
///
/// ```rust
/// use chromatic_plots::{Imshow, ImshowOptions, Plot, RenderConfig};
/// use chromatic_rainbow::{AxisArrays, Rainbow, Unit};
/// use ndarray::Array2;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let wavelength = AxisArrays::wavelength(vec![1.0, 2.0, 3.0], Unit::Micron);
/// let time = AxisArrays::time(vec![0.0, 0.5, 1.0, 1.5], Unit::Hour);
/// let rainbow = Rainbow::new(wavelength, time)
///     .with_fluxlike("flux", Array2::ones((3, 4)), "")?;
///
/// let options = ImshowOptions::new().t_unit(Unit::Hour).build()?;
/// let canvas = Imshow.render(&rainbow, &options, &mut RenderConfig::default())?;
/// assert_eq!(canvas.y_label(), Some("Wavelength (µm)"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Imshow;

impl Imshow {
    pub fn new() -> Self {
        Self
    }
}

impl Plot for Imshow {
    type Options = ImshowOptions;
    type Data = Rainbow;

    fn draw<'c>(
        &self,
        rainbow: &Rainbow,
        options: &ImshowOptions,
        canvas: &'c mut Canvas,
        render_config: &mut RenderConfig,
    ) -> Result<&'c mut Canvas> {
        let resolve_start = std::time::Instant::now();

        // Edges are derived from centers where missing; absent centers are fatal
        let wavelength = rainbow.wavelength_descriptor()?;
        let time = rainbow.time_descriptor()?;

        let mut warnings = Vec::new();
        let row = resolve_or_fallback(
            &wavelength,
            options.w_unit,
            AxisRole::Row,
            render_config,
            &mut warnings,
        )?;
        let column = resolve_or_fallback(
            &time,
            options.t_unit,
            AxisRole::Column,
            render_config,
            &mut warnings,
        )?;
        let extent = build_extent(row.bounds(), column.bounds())?;

        let quantity = rainbow.get(&options.quantity)?;
        debug!(
            "Resolved imshow axes in {:?}: extent {:?}",
            resolve_start.elapsed(),
            extent.as_array()
        );

        let style = &options.style;
        let request = RasterRequest {
            values: &quantity.values,
            extent,
            x_label: &column.label,
            y_label: &row.label,
            aspect: options.aspect,
            interpolation: style.interpolation,
            style: &style.raster,
            data_range: quantity.finite_range(),
            colorbar_label: options.colorbar.then_some(quantity.unit.as_str()),
        };

        let base = options.base();
        let pixels = render_raster(&request, canvas.size(), base, render_config)?;

        info!(
            "Drew '{}' ({}x{}) with {} axis fallback(s)",
            options.quantity,
            rainbow.nwave(),
            rainbow.ntime(),
            warnings.len()
        );

        canvas.commit(Frame {
            pixels,
            extent,
            x_label: column.label,
            y_label: row.label,
            colorbar_label: options.colorbar.then(|| quantity.unit.clone()),
            warnings,
        });
        Ok(canvas)
    }
}

/// Resolve one axis, substituting its index axis and reporting a warning
/// when it cannot be drawn physically
fn resolve_or_fallback(
    descriptor: &AxisDescriptor,
    target_unit: Unit,
    role: AxisRole,
    render_config: &mut RenderConfig,
    warnings: &mut Vec<AxisFallback>,
) -> Result<AxisExtent> {
    match resolve(descriptor, target_unit, role)? {
        Ok(extent) => Ok(extent),
        Err(reason) => {
            let fallback = AxisFallback::new(descriptor, role, reason);
            render_config.report_warning(&fallback);
            let extent = fallback.index_extent();
            warnings.push(fallback);
            Ok(extent)
        }
    }
}

/// Draw `options.quantity` from `rainbow` onto a new canvas
///
/// Shorthand for [`Imshow::render`] with a default [`RenderConfig`].
/// Fallback warnings are still logged and are available from
/// [`Canvas::warnings`].
pub fn imshow(rainbow: &Rainbow, options: &ImshowOptions) -> Result<Canvas> {
    Imshow.render(rainbow, options, &mut RenderConfig::default())
}
