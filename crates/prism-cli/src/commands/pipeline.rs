use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use prism_core::filters::{FilterParams, FilterType};
use prism_core::pipeline::config::PipelineConfig;
use prism_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};

use crate::summary::print_pipeline_summary;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FilterArg {
    LowPass,
    HighPass,
    BandPass,
    Directional,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::LowPass => FilterType::LowPass,
            FilterArg::HighPass => FilterType::HighPass,
            FilterArg::BandPass => FilterType::BandPass,
            FilterArg::Directional => FilterType::Directional,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Input image file (PNG, TIFF, JPEG, ...)
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Transform size N (power of two, 1-2048); the image is resampled to N x N
    #[arg(short, long, default_value = "512")]
    pub resolution: u32,

    /// Frequency-domain filter
    #[arg(long, value_enum, default_value = "low-pass")]
    pub filter: FilterArg,

    /// Filter strength (0.0-1.0)
    #[arg(long, default_value = "0.5")]
    pub strength: f32,

    /// Pass direction in radians (directional filter)
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub direction: f32,

    /// Band-pass center frequency (normalized, Nyquist = 1.0)
    #[arg(long, default_value = "0.3")]
    pub radius: f32,

    /// Write the log-magnitude spectrum instead of the filtered image
    #[arg(long)]
    pub show_spectrum: bool,

    /// Output file path (.png, .tif or .tiff)
    #[arg(short, long, default_value = "filtered.png")]
    pub output: PathBuf,
}

/// Drives an indicatif bar with one tick per retired dispatch.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)
    };

    print_pipeline_summary(&config);

    let stages = if config.filter.show_spectrum {
        PipelineStage::SPECTRUM_SEQUENCE.len()
    } else {
        PipelineStage::IMAGE_SEQUENCE.len()
    };
    let pb = ProgressBar::new(stages as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:22} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let reporter = Arc::new(BarReporter { bar: pb.clone() });
    run_pipeline_reported(&config, reporter)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;

    pb.finish_with_message("Done");
    tracing::info!(output = %config.output.display(), "Run finished");
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> PipelineConfig {
    PipelineConfig {
        input: args.file.clone(),
        output: args.output.clone(),
        resolution: args.resolution,
        filter: FilterParams {
            filter_type: args.filter.into(),
            strength: args.strength,
            direction: args.direction,
            radius: args.radius,
            show_spectrum: args.show_spectrum,
        },
    }
}
