use ndarray::Array2;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::colormap::LUT_SIZE;
use crate::coords::{ExtentBox, format_tick};
use crate::error::{PlotError, Result};
use crate::options::{Aspect, BasePlotOptions, Interpolation, RasterStyle};
use crate::render::{ProgressInfo, RenderConfig};

/// Font size of the optional plot title
const TITLE_FONT_SIZE: u32 = 20;
/// Pixel rows written between progress reports
const ROWS_PER_PROGRESS: usize = 64;
/// Width of the label area on the colorbar
const COLORBAR_LABEL_AREA: u32 = 65;

/// Everything the raster backend needs to draw one image
#[derive(Debug, Clone)]
pub struct RasterRequest<'a> {
    /// Cell values indexed `[row, column]`; row 0 is drawn at the top
    pub values: &'a Array2<f64>,
    pub extent: ExtentBox,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub aspect: Aspect,
    pub interpolation: Interpolation,
    pub style: &'a RasterStyle,
    /// Finite (min, max) of `values`, used for unset color limits
    pub data_range: Option<(f64, f64)>,
    /// Draw a colorbar with this label
    pub colorbar_label: Option<&'a str>,
}

/// Render a raster image with axes (and optionally a colorbar) into a new RGB buffer
///
/// This function handles the complete rendering pipeline:
/// 1. Sets up the Plotters chart with axis titles, tick labels and colorbar
/// 2. Releases the buffer and writes cell colors directly into the plotting area
///
/// Progress reporting is handled via the RenderConfig if provided.
pub fn render_raster(
    request: &RasterRequest<'_>,
    (width, height): (u32, u32),
    base: &BasePlotOptions,
    render_config: &mut RenderConfig,
) -> Result<Vec<u8>> {
    let colorbar_width = if request.colorbar_label.is_some() {
        base.colorbar_width
    } else {
        0
    };
    // Pixels taken by margins, tick labels and the title around the raster
    let axes_width = base.margin.saturating_mul(2).saturating_add(base.y_label_area_size);
    let axes_height = base
        .margin
        .saturating_mul(2)
        .saturating_add(base.x_label_area_size)
        .saturating_add(title_height(base));
    let reserved_width = axes_width.saturating_add(colorbar_width);
    if width <= reserved_width || height <= axes_height {
        return Err(PlotError::CanvasTooSmall { width, height });
    }

    let setup_start = std::time::Instant::now();
    let limits = request.style.color_limits(request.data_range);
    let lut = request.style.colormap.lookup_table(LUT_SIZE);
    let x_span = request.extent.x_span();
    let y_span = request.extent.y_span();

    let mut pixel_buffer = vec![255; (width as usize) * (height as usize) * 3];

    let (plot_x_range, plot_y_range) = {
        let backend = BitMapBackend::with_buffer(&mut pixel_buffer, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::backend(format!("failed to fill plot background: {e}")))?;

        let (main_area, colorbar_area) = if colorbar_width > 0 {
            let (main, bar) = root.split_horizontally(width - colorbar_width);
            (main, Some(bar))
        } else {
            (root.clone(), None)
        };

        let main_area = match request.aspect {
            Aspect::Auto => main_area,
            Aspect::Equal => {
                let (area_w, area_h) = main_area.dim_in_pixel();
                let avail_w = area_w.saturating_sub(axes_width);
                let avail_h = area_h.saturating_sub(axes_height);
                let (pad_x, pad_y) = equal_aspect_padding(avail_w, avail_h, &request.extent);
                main_area.margin(pad_y / 2, pad_y - pad_y / 2, pad_x / 2, pad_x - pad_x / 2)
            }
        };

        // Reversed spans are charted on negated coordinates; label the real values
        let x_formatter = move |x: &f64| -> String { format_tick(x_span.display_value(*x)) };
        let y_formatter = move |y: &f64| -> String { format_tick(y_span.display_value(*y)) };

        let mut builder = ChartBuilder::on(&main_area);
        builder
            .margin(base.margin)
            .x_label_area_size(base.x_label_area_size)
            .y_label_area_size(base.y_label_area_size);
        if !base.title.is_empty() {
            builder.caption(&base.title, ("sans-serif", f64::from(TITLE_FONT_SIZE)).into_font());
        }
        let mut chart = builder
            .build_cartesian_2d(x_span.chart_range(), y_span.chart_range())
            .map_err(|e| PlotError::backend(format!("failed to build chart: {e}")))?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(8)
            .y_labels(8)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        if !request.x_label.is_empty() {
            mesh.x_desc(request.x_label);
        }
        if !request.y_label.is_empty() {
            mesh.y_desc(request.y_label);
        }
        mesh.draw()
            .map_err(|e| PlotError::backend(format!("failed to draw plot mesh: {e}")))?;

        // Get the plotting area bounds (we'll use these after Plotters releases the buffer)
        let (plot_x_range, plot_y_range) = chart.plotting_area().get_pixel_range();

        if let (Some(bar_area), Some(label)) = (colorbar_area, request.colorbar_label) {
            let top = plot_y_range.start.max(0) as u32;
            let bottom = height.saturating_sub(plot_y_range.end.max(0) as u32);
            draw_colorbar(&bar_area, label, limits, &lut, (top, bottom))?;
        }

        root.present()
            .map_err(|e| PlotError::backend(format!("failed to present plotters buffer: {e}")))?;

        (plot_x_range, plot_y_range)
    }; // End Plotters scope - pixel_buffer is now released and we can write to it

    debug!("Chart setup: {:?}", setup_start.elapsed());

    if plot_x_range.end <= plot_x_range.start || plot_y_range.end <= plot_y_range.start {
        return Err(PlotError::CanvasTooSmall { width, height });
    }

    let (nrows, ncols) = request.values.dim();
    if nrows == 0 || ncols == 0 {
        return Ok(pixel_buffer);
    }

    let raster_start = std::time::Instant::now();
    let plot_width = (plot_x_range.end - plot_x_range.start) as f64;
    let plot_height = (plot_y_range.end - plot_y_range.start) as f64;
    let alpha = request.style.alpha.unwrap_or(1.0);

    // Fractional column index for every pixel column in the plotting area
    let pixel_columns: Vec<(i32, f64)> = (plot_x_range.start..plot_x_range.end)
        .map(|px| {
            let fraction = ((px - plot_x_range.start) as f64 + 0.5) / plot_width;
            let x = x_span.value_at(fraction);
            (px, request.extent.column_index_at(x, ncols))
        })
        .collect();

    let total_rows = (plot_y_range.end - plot_y_range.start) as usize;
    for (rows_done, py) in (plot_y_range.start..plot_y_range.end).enumerate() {
        // Fraction measured up from the bottom pixel edge
        let fraction = (plot_y_range.end as f64 - (py as f64 + 0.5)) / plot_height;
        let y = y_span.value_at(fraction);
        let row_index = request.extent.row_index_at(y, nrows);

        if py >= 0 && (py as u32) < height {
            for &(px, column_index) in &pixel_columns {
                if px < 0 || px as u32 >= width {
                    continue;
                }
                let value = sample(request.values, row_index, column_index, request.interpolation);
                if !value.is_finite() {
                    // Leave missing data as background
                    continue;
                }
                let RGBColor(r, g, b) = lut[lut_index(value, limits, lut.len())];
                let idx = ((py as usize) * (width as usize) + px as usize) * 3;
                pixel_buffer[idx] = blend(r, pixel_buffer[idx], alpha);
                pixel_buffer[idx + 1] = blend(g, pixel_buffer[idx + 1], alpha);
                pixel_buffer[idx + 2] = blend(b, pixel_buffer[idx + 2], alpha);
            }
        }

        let rows_written = rows_done + 1;
        if rows_written % ROWS_PER_PROGRESS == 0 || rows_written == total_rows {
            render_config.report_progress(ProgressInfo {
                rows_done: rows_written as u32,
                total_rows: total_rows as u32,
                percent: (rows_written as f32 / total_rows as f32) * 100.0,
            });
        }
    }

    debug!(
        "Raster writing: {:?} ({}x{} cells onto {}x{} pixels, {} interpolation)",
        raster_start.elapsed(),
        nrows,
        ncols,
        plot_width,
        plot_height,
        request.interpolation
    );

    Ok(pixel_buffer)
}

fn title_height(base: &BasePlotOptions) -> u32 {
    if base.title.is_empty() {
        0
    } else {
        TITLE_FONT_SIZE
    }
}

/// Draw a vertical colorbar spanning `limits`, inset by `(top, bottom)` pixels
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    label: &str,
    limits: (f64, f64),
    lut: &[RGBColor],
    (top, bottom): (u32, u32),
) -> Result<()> {
    let (lo, hi) = if limits.0 <= limits.1 {
        limits
    } else {
        (limits.1, limits.0)
    };
    // Axis tick generation never terminates on an unbounded span
    if !(hi - lo).is_finite() || hi <= lo {
        return Err(PlotError::backend(format!(
            "colorbar limits ({lo}, {hi}) do not span a finite range"
        )));
    }

    let mut chart = ChartBuilder::on(area)
        .margin_top(top)
        .margin_bottom(bottom)
        .margin_left(5)
        .margin_right(15)
        .y_label_area_size(COLORBAR_LABEL_AREA)
        .build_cartesian_2d(0f64..1f64, lo..hi)
        .map_err(|e| PlotError::backend(format!("failed to build colorbar: {e}")))?;

    let formatter = |v: &f64| -> String { format_tick(*v) };
    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&formatter);
    if !label.is_empty() {
        mesh.y_desc(label);
    }
    mesh.draw()
        .map_err(|e| PlotError::backend(format!("failed to draw colorbar axis: {e}")))?;

    let steps = lut.len().max(1);
    chart
        .draw_series((0..steps).map(|i| {
            let v0 = lo + (hi - lo) * i as f64 / steps as f64;
            let v1 = lo + (hi - lo) * (i + 1) as f64 / steps as f64;
            let color = lut[lut_index(0.5 * (v0 + v1), limits, lut.len())];
            Rectangle::new([(0.0, v0), (1.0, v1)], color.filled())
        }))
        .map_err(|e| PlotError::backend(format!("failed to draw colorbar: {e}")))?;

    Ok(())
}

/// Total horizontal and vertical padding that makes display units square.
///
/// `avail_w` x `avail_h` is the plotting area before padding. One of the
/// two returned paddings is always zero.
pub fn equal_aspect_padding(avail_w: u32, avail_h: u32, extent: &ExtentBox) -> (u32, u32) {
    let data_w = (extent.right - extent.left).abs();
    let data_h = (extent.top - extent.bottom).abs();
    if avail_w == 0 || avail_h == 0 || data_w == 0.0 || data_h == 0.0 {
        return (0, 0);
    }

    let target = data_h / data_w;
    let current = avail_h as f64 / avail_w as f64;
    if current > target {
        let used = ((avail_w as f64 * target).round() as u32).min(avail_h);
        (0, avail_h - used)
    } else {
        let used = ((avail_h as f64 / target).round() as u32).min(avail_w);
        (avail_w - used, 0)
    }
}

/// Sample `values` at a fractional (row, column) position.
///
/// Cell `(i, j)` is centered on `(i, j)`. Positions past the outer cell
/// centers clamp to the edge cells.
pub fn sample(values: &Array2<f64>, row: f64, column: f64, interpolation: Interpolation) -> f64 {
    let (nrows, ncols) = values.dim();
    let nearest = || values[[nearest_index(row, nrows), nearest_index(column, ncols)]];
    match interpolation {
        Interpolation::Nearest => nearest(),
        Interpolation::Bilinear => {
            let (r0, r1, tr) = bracket(row, nrows);
            let (c0, c1, tc) = bracket(column, ncols);
            let corners = [
                values[[r0, c0]],
                values[[r0, c1]],
                values[[r1, c0]],
                values[[r1, c1]],
            ];
            if corners.iter().any(|v| !v.is_finite()) {
                return nearest();
            }
            let upper = lerp(corners[0], corners[1], tc);
            let lower = lerp(corners[2], corners[3], tc);
            lerp(upper, lower, tr)
        }
    }
}

fn nearest_index(position: f64, n: usize) -> usize {
    (position.round().max(0.0) as usize).min(n - 1)
}

fn bracket(position: f64, n: usize) -> (usize, usize, f64) {
    let position = position.clamp(0.0, (n - 1) as f64);
    let i0 = position.floor() as usize;
    let i1 = (i0 + 1).min(n - 1);
    (i0, i1, position - i0 as f64)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Index into a lookup table of `n` colors for `value` within `limits`
pub fn lut_index(value: f64, (lo, hi): (f64, f64), n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    let t = if t.is_nan() { 0.0 } else { t };
    ((t * (n - 1) as f64).round() as usize).min(n - 1)
}

fn blend(fg: u8, bg: u8, alpha: f64) -> u8 {
    if alpha >= 1.0 {
        return fg;
    }
    (alpha * fg as f64 + (1.0 - alpha) * bg as f64).round() as u8
}
