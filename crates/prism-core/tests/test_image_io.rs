mod common;

use std::path::Path;

use ndarray::Array2;

use prism_core::error::PrismError;
use prism_core::filters::{FilterParams, FilterType};
use prism_core::frame::ColorFrame;
use prism_core::io::image_io::{
    is_supported_output, load_color_image, save_color_image, save_color_png, save_color_tiff,
};
use prism_core::pipeline::config::PipelineConfig;
use prism_core::pipeline::run_pipeline;

use common::make_noise_image;

fn make_test_frame() -> ColorFrame {
    let mut red = Array2::<f32>::zeros((4, 4));
    red[[0, 1]] = 0.5;
    red[[1, 0]] = 1.0;
    red[[2, 3]] = 0.25;
    let green = Array2::from_elem((4, 4), 0.75);
    let blue = Array2::from_shape_fn((4, 4), |(r, c)| (r * 4 + c) as f32 / 15.0);
    ColorFrame::from_channels(red, green, blue)
}

#[test]
fn test_save_load_roundtrip_tiff() {
    let frame = make_test_frame();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.tiff");

    save_color_tiff(&frame, &path).unwrap();
    let loaded = load_color_image(&path).unwrap();

    assert_eq!(loaded.width(), 4);
    assert_eq!(loaded.height(), 4);
    for channel in 0..3 {
        let err = common::max_abs_diff(&loaded.channel(channel).data, &frame.channel(channel).data);
        assert!(err < 1e-4, "channel {channel}: {err}");
    }
}

#[test]
fn test_save_load_roundtrip_png() {
    let frame = make_test_frame();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_color_png(&frame, &path).unwrap();
    assert!(path.exists());
    let loaded = load_color_image(&path).unwrap();

    // 8-bit quantization
    for channel in 0..3 {
        let err = common::max_abs_diff(&loaded.channel(channel).data, &frame.channel(channel).data);
        assert!(err < 1.0 / 255.0, "channel {channel}: {err}");
    }
    assert_eq!(loaded.red.data[[1, 0]], 1.0);
    assert_eq!(loaded.red.data[[0, 0]], 0.0);
}

#[test]
fn test_save_clamps_out_of_range_values() {
    let frame = ColorFrame::from_channels(
        Array2::from_elem((2, 2), -0.5),
        Array2::from_elem((2, 2), 1.5),
        Array2::from_elem((2, 2), 0.0),
    );
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clamped.tif");

    save_color_image(&frame, &path).unwrap();
    let loaded = load_color_image(&path).unwrap();
    assert_eq!(loaded.red.data[[0, 0]], 0.0);
    assert_eq!(loaded.green.data[[1, 1]], 1.0);
}

#[test]
fn test_load_missing_file_is_an_error() {
    assert!(matches!(
        load_color_image(Path::new("/nonexistent/input.png")),
        Err(PrismError::ImageError(_))
    ));
}

#[test]
fn test_supported_output_extensions() {
    assert!(is_supported_output(Path::new("out.png")));
    assert!(is_supported_output(Path::new("out.tif")));
    assert!(is_supported_output(Path::new("out.tiff")));
    assert!(!is_supported_output(Path::new("out.jpg")));
    assert!(!is_supported_output(Path::new("out")));
}

#[test]
fn test_run_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.tiff");
    let output = dir.path().join("output.png");

    // 40 x 40 input is resampled to the 32 x 32 transform size.
    let image = make_noise_image(40, 17);
    save_color_tiff(&image, &input).unwrap();

    let config = PipelineConfig {
        input,
        output: output.clone(),
        resolution: 32,
        filter: FilterParams {
            filter_type: FilterType::LowPass,
            strength: 0.5,
            ..Default::default()
        },
    };

    let result = run_pipeline(&config).unwrap();
    assert_eq!(result.width(), 32);
    assert_eq!(result.height(), 32);
    assert!(output.exists());

    let written = load_color_image(&output).unwrap();
    assert_eq!(written.width(), 32);
    let err = common::max_abs_diff(&written.green.data, &result.green.data);
    assert!(err <= 0.5 / 255.0 + 1e-6, "max error {err}");
}

#[test]
fn test_run_pipeline_rejects_config_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        input: dir.path().join("missing.png"),
        output: dir.path().join("out.png"),
        resolution: 100,
        filter: FilterParams::default(),
    };
    let err = run_pipeline(&config).unwrap_err();
    assert!(err.to_string().contains("power of two"), "got: {err}");
}
