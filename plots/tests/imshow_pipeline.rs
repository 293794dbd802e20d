//! End-to-end imshow tests
//!
//! Each test builds a small rainbow, draws it through the full pipeline
//! (descriptors, axis resolution, fallback, extent, raster) and checks what
//! ended up on the canvas.

use chromatic_plots::render::WarningCallback;
use chromatic_plots::{
    AxisFallback, AxisRole, Canvas, ExtentBox, FallbackReason, Imshow, ImshowOptions,
    OutputFormat, Plot, PlotError, ProgressCallback, ProgressInfo, RenderConfig,
};
use chromatic_rainbow::{AxisArrays, Rainbow, RainbowError, Unit};
use ndarray::Array2;
use std::cell::RefCell;
use std::rc::Rc;

const WHITE: [u8; 3] = [255, 255, 255];

/// 3 wavelengths x 4 times on irregular grids that cannot be drawn physically
fn irregular_rainbow() -> Rainbow {
    let wavelength = AxisArrays::wavelength(vec![1.0, 2.0, 4.5], Unit::Micron);
    let time = AxisArrays::time(vec![0.0, 1.0, 1.5, 4.0], Unit::Hour);
    let flux = Array2::from_shape_fn((3, 4), |(i, j)| (i * 4 + j) as f64);
    Rainbow::new(wavelength, time)
        .with_fluxlike("flux", flux, "electrons")
        .expect("Failed to create irregular rainbow")
}

/// 3 wavelengths x 4 times on uniform linear grids
fn uniform_rainbow() -> Rainbow {
    let wavelength = AxisArrays::wavelength(vec![0.5, 0.6, 0.7], Unit::Micron);
    let time = AxisArrays::time(vec![0.0, 1.0, 2.0, 3.0], Unit::Hour);
    let flux = Array2::from_shape_fn((3, 4), |(i, j)| 1.0 + 0.01 * (i + j) as f64);
    Rainbow::new(wavelength, time)
        .with_fluxlike("flux", flux, "")
        .expect("Failed to create uniform rainbow")
}

fn collecting_config() -> (RenderConfig, Rc<RefCell<Vec<AxisFallback>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let callback: WarningCallback = Box::new(move |warning: &AxisFallback| {
        sink.borrow_mut().push(warning.clone());
    });
    let config = RenderConfig {
        on_warning: Some(callback),
        ..RenderConfig::default()
    };
    (config, seen)
}

fn all_white(canvas: &Canvas) -> bool {
    canvas.pixels().iter().all(|&b| b == 255)
}

#[test]
fn test_index_axes_when_no_grid_is_uniform() {
    let rainbow = irregular_rainbow();
    let options = ImshowOptions::new().colorbar(true).build().unwrap();
    let (mut config, seen) = collecting_config();

    let canvas = Imshow.render(&rainbow, &options, &mut config).unwrap();

    assert_eq!(
        canvas.extent(),
        Some(ExtentBox {
            left: -0.5,
            right: 3.5,
            bottom: 2.5,
            top: -0.5,
        })
    );
    assert_eq!(canvas.y_label(), Some("Wavelength Index"));
    assert_eq!(canvas.x_label(), Some("Time Index"));
    assert_eq!(canvas.colorbar_label(), Some("electrons"));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].role, AxisRole::Row);
    assert_eq!(seen[0].reason, FallbackReason::UnsupportedScale);
    assert_eq!(seen[1].role, AxisRole::Column);
    assert_eq!(canvas.warnings(), seen.as_slice());
}

#[test]
fn test_physical_axes_in_display_units() {
    let rainbow = uniform_rainbow();
    let options = ImshowOptions::new()
        .w_unit(Unit::Nanometer)
        .t_unit(Unit::Hour)
        .build()
        .unwrap();
    let (mut config, seen) = collecting_config();

    let canvas = Imshow.render(&rainbow, &options, &mut config).unwrap();
    let extent = canvas.extent().unwrap();

    // Wavelength edges 0.45..0.75 µm, larger value at the bottom
    assert!((extent.bottom - 750.0).abs() < 1e-9);
    assert!((extent.top - 450.0).abs() < 1e-9);
    assert!((extent.left + 0.5).abs() < 1e-12);
    assert!((extent.right - 3.5).abs() < 1e-12);
    assert_eq!(canvas.y_label(), Some("Wavelength (nm)"));
    assert_eq!(canvas.x_label(), Some("Time (h)"));
    assert!(seen.borrow().is_empty());
    assert!(canvas.warnings().is_empty());

    // The middle of the canvas lies inside the plotting area
    let center = canvas.pixel(canvas.width() / 2, canvas.height() / 2).unwrap();
    assert_ne!(center, WHITE);
}

#[test]
fn test_log_wavelengths_are_labelled_in_log10() {
    let centers: Vec<f64> = (0..5).map(|i| 0.5 * 1.1f64.powi(i)).collect();
    let wavelength = AxisArrays::wavelength(centers, Unit::Micron);
    let time = AxisArrays::time(vec![0.0, 0.1, 0.2], Unit::Day);
    let rainbow = Rainbow::new(wavelength, time)
        .with_fluxlike("flux", Array2::ones((5, 3)), "")
        .unwrap();

    let options = ImshowOptions::new().colorbar(false).build().unwrap();
    let canvas = Imshow.render(&rainbow, &options, &mut RenderConfig::default()).unwrap();

    assert_eq!(canvas.y_label(), Some("log10[Wavelength/(µm)]"));
    assert_eq!(canvas.colorbar_label(), None);
    let extent = canvas.extent().unwrap();
    assert!(extent.bottom > extent.top);
    assert!(extent.top < 0.5f64.log10());
}

#[test]
fn test_incompatible_unit_leaves_canvas_untouched() {
    let rainbow = uniform_rainbow();
    let options = ImshowOptions::new().w_unit(Unit::Day).build().unwrap();
    let mut canvas = Canvas::new(640, 480);
    let before = canvas.clone();

    let err = Imshow
        .draw(&rainbow, &options, &mut canvas, &mut RenderConfig::default())
        .unwrap_err();

    assert!(err.is_unit_conversion());
    assert_eq!(canvas, before);
    assert!(canvas.is_blank());
    assert!(all_white(&canvas));
}

#[test]
fn test_unknown_quantity() {
    let rainbow = uniform_rainbow();
    let options = ImshowOptions::new().quantity("model").build().unwrap();
    let mut canvas = Canvas::new(640, 480);

    let err = Imshow
        .draw(&rainbow, &options, &mut canvas, &mut RenderConfig::default())
        .unwrap_err();

    match err {
        PlotError::Rainbow(RainbowError::UnknownQuantity { name, available }) => {
            assert_eq!(name, "model");
            assert_eq!(available, vec!["flux".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(canvas.is_blank());
}

#[test]
fn test_missing_centers_is_fatal() {
    let wavelength = AxisArrays::wavelength(vec![0.5, 0.6, 0.7], Unit::Micron);
    let time = AxisArrays::time(Vec::new(), Unit::Day);
    let rainbow = Rainbow::new(wavelength, time)
        .with_fluxlike("flux", Array2::zeros((3, 0)), "")
        .unwrap();

    let err = Imshow
        .render(&rainbow, &ImshowOptions::default(), &mut RenderConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        PlotError::Rainbow(RainbowError::MissingCenters { .. })
    ));
}

#[test]
fn test_canvas_too_small() {
    let rainbow = uniform_rainbow();
    let mut canvas = Canvas::new(120, 60);

    let err = Imshow
        .draw(
            &rainbow,
            &ImshowOptions::default(),
            &mut canvas,
            &mut RenderConfig::default(),
        )
        .unwrap_err();

    assert!(matches!(err, PlotError::CanvasTooSmall { width: 120, height: 60 }));
    assert!(canvas.is_blank());
}

#[test]
fn test_redraw_replaces_previous_state() {
    let options = ImshowOptions::new().t_unit(Unit::Hour).build().unwrap();
    let mut canvas = Canvas::new(640, 480);
    let mut config = RenderConfig::default();

    Imshow
        .draw(&irregular_rainbow(), &options, &mut canvas, &mut config)
        .unwrap();
    assert_eq!(canvas.warnings().len(), 2);

    Imshow
        .draw(&uniform_rainbow(), &options, &mut canvas, &mut config)
        .unwrap();
    assert!(canvas.warnings().is_empty());
    assert_eq!(canvas.x_label(), Some("Time (h)"));
}

#[test]
fn test_progress_reaches_completion() {
    let updates = Rc::new(RefCell::new(Vec::<ProgressInfo>::new()));
    let sink = Rc::clone(&updates);
    let callback: ProgressCallback = Box::new(move |info: ProgressInfo| {
        sink.borrow_mut().push(info);
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    });
    let mut config = RenderConfig {
        progress: Some(callback),
        ..RenderConfig::default()
    };

    Imshow
        .render(&uniform_rainbow(), &ImshowOptions::default(), &mut config)
        .unwrap();

    let updates = updates.borrow();
    let last = updates.last().expect("no progress reported");
    assert_eq!(last.rows_done, last.total_rows);
    assert!((last.percent - 100.0).abs() < 1e-3);
}

#[test]
fn test_styling_options_are_applied() {
    let style = chromatic_plots::ImshowStyle::from_pairs([
        ("cmap", "greys"),
        ("vmin", "0"),
        ("vmax", "2"),
        ("interpolation", "bilinear"),
    ])
    .unwrap();
    let options = ImshowOptions::new()
        .t_unit(Unit::Hour)
        .aspect(chromatic_plots::Aspect::Equal)
        .style(style)
        .build()
        .unwrap();

    let canvas = Imshow
        .render(&uniform_rainbow(), &options, &mut RenderConfig::default())
        .unwrap();
    assert!(!canvas.is_blank());
    assert!(!all_white(&canvas));
}

#[test]
fn test_encode_png_and_jpeg() {
    let canvas = chromatic_plots::imshow(&uniform_rainbow(), &ImshowOptions::default()).unwrap();

    let png = canvas.encode(OutputFormat::Png).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let jpeg = canvas.encode(OutputFormat::Jpeg).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let image = canvas.to_image().unwrap();
    assert_eq!(image.dimensions(), (800, 600));
}

#[test]
fn test_colorbar_for_flux_spanning_the_float_range() {
    let wavelength = AxisArrays::wavelength(vec![0.5, 0.6], Unit::Micron);
    let time = AxisArrays::time(vec![0.0, 1.0, 2.0], Unit::Hour);
    let flux = Array2::from_shape_fn((2, 3), |(i, _)| if i == 0 { -f64::MAX } else { f64::MAX });
    let rainbow = Rainbow::new(wavelength, time)
        .with_fluxlike("flux", flux, "")
        .unwrap();
    let options = ImshowOptions::new().colorbar(true).build().unwrap();

    let canvas = Imshow
        .render(&rainbow, &options, &mut RenderConfig::default())
        .unwrap();
    assert!(!canvas.is_blank());
    assert!(!all_white(&canvas));
}

#[test]
fn test_infinite_limits_from_builder_still_render() {
    let raster = chromatic_plots::RasterStyle::new()
        .vmax(f64::INFINITY)
        .build()
        .unwrap();
    let style = chromatic_plots::ImshowStyle::new().raster(raster).build().unwrap();
    let options = ImshowOptions::new().style(style).build().unwrap();

    let canvas = Imshow
        .render(&uniform_rainbow(), &options, &mut RenderConfig::default())
        .unwrap();
    assert!(!canvas.is_blank());
}

#[test]
fn test_oversized_margin_reports_canvas_too_small() {
    let base = chromatic_plots::BasePlotOptions::new()
        .margin(u32::MAX / 2)
        .build()
        .unwrap();
    let options = ImshowOptions::new().base(base).build().unwrap();
    let mut canvas = Canvas::new(640, 480);

    let err = Imshow
        .draw(&uniform_rainbow(), &options, &mut canvas, &mut RenderConfig::default())
        .unwrap_err();

    assert!(matches!(err, PlotError::CanvasTooSmall { width: 640, height: 480 }));
    assert!(canvas.is_blank());
}

#[test]
fn test_single_time_has_no_edges_and_uses_index_axis() {
    let wavelength = AxisArrays::wavelength(vec![0.5, 0.6, 0.7], Unit::Micron);
    let time = AxisArrays::time(vec![2.0], Unit::Hour);
    let rainbow = Rainbow::new(wavelength, time)
        .with_fluxlike("flux", Array2::ones((3, 1)), "")
        .unwrap();
    let (mut config, seen) = collecting_config();

    let canvas = Imshow
        .render(&rainbow, &ImshowOptions::default(), &mut config)
        .unwrap();

    let extent = canvas.extent().unwrap();
    assert_eq!((extent.left, extent.right), (-0.5, 0.5));
    assert_eq!(canvas.x_label(), Some("Time Index"));
    assert_eq!(canvas.y_label(), Some("Wavelength (µm)"));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].role, AxisRole::Column);
}
