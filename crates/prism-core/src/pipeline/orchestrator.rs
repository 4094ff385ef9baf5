use std::sync::Arc;

use tracing::info;

use crate::error::{PrismError, Result};
use crate::fft::{pass_order, transform_axis, ButterflyEngine, Direction, Resolution};
use crate::filters::{apply_filter, FilterParams, Transfer};
use crate::frame::{ColorFrame, ImageSource};
use crate::io::image_io::{load_color_image, save_color_image};
use crate::spectrum::{load_source, render, SpectrumBuffer};

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

/// Forward FFT, frequency filter, inverse FFT for N x N three-channel images.
///
/// The resolution is validated once here; every dispatch after construction
/// is infallible apart from being handed a buffer of another size.
#[derive(Clone, Debug)]
pub struct SpectralPipeline {
    resolution: Resolution,
    engine: ButterflyEngine,
}

impl SpectralPipeline {
    /// Fails on N that is zero, not a power of two, or above `N_MAX`.
    pub fn new(n: u32) -> Result<Self> {
        Ok(Self::with_resolution(Resolution::new(n)?))
    }

    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            engine: ButterflyEngine::new(resolution),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// A zeroed spectrum buffer of this pipeline's size.
    pub fn allocate(&self) -> SpectrumBuffer {
        SpectrumBuffer::zeros(self.resolution)
    }

    fn check_buffer(&self, buffer: &SpectrumBuffer) -> Result<()> {
        if buffer.resolution() != self.resolution {
            return Err(PrismError::DimensionMismatch {
                expected: self.resolution.get(),
                actual: buffer.resolution().get(),
            });
        }
        Ok(())
    }

    pub fn load<S: ImageSource + ?Sized>(
        &self,
        buffer: &mut SpectrumBuffer,
        source: &S,
    ) -> Result<()> {
        self.check_buffer(buffer)?;
        load_source(buffer, source);
        Ok(())
    }

    /// Row transform then column transform, unnormalized.
    pub fn forward(&self, buffer: &mut SpectrumBuffer) -> Result<()> {
        self.transform_reported(buffer, Direction::Forward, &NoOpReporter)
    }

    pub fn filter<T: Transfer + ?Sized>(
        &self,
        buffer: &mut SpectrumBuffer,
        transfer: &T,
    ) -> Result<()> {
        self.check_buffer(buffer)?;
        apply_filter(buffer, transfer);
        Ok(())
    }

    /// Column transform then row transform, each pass divided by N.
    pub fn inverse(&self, buffer: &mut SpectrumBuffer) -> Result<()> {
        self.transform_reported(buffer, Direction::Inverse, &NoOpReporter)
    }

    pub fn render(&self, buffer: &SpectrumBuffer, show_spectrum: bool) -> Result<ColorFrame> {
        self.check_buffer(buffer)?;
        Ok(render(buffer, show_spectrum))
    }

    /// Full run with the host's filter parameters.
    pub fn run<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        params: &FilterParams,
    ) -> Result<ColorFrame> {
        self.run_reported(source, params, &NoOpReporter)
    }

    pub fn run_reported<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        params: &FilterParams,
        reporter: &dyn ProgressReporter,
    ) -> Result<ColorFrame> {
        params.validate()?;
        let mut buffer = self.allocate();
        self.run_into(&mut buffer, source, params, params.show_spectrum, reporter)
    }

    /// Run every dispatch in order on a caller-owned buffer.
    ///
    /// With `show_spectrum` the filtered spectrum is rendered directly and
    /// the inverse dispatches are skipped.
    pub fn run_into<S, T>(
        &self,
        buffer: &mut SpectrumBuffer,
        source: &S,
        transfer: &T,
        show_spectrum: bool,
        reporter: &dyn ProgressReporter,
    ) -> Result<ColorFrame>
    where
        S: ImageSource + ?Sized,
        T: Transfer + ?Sized,
    {
        self.check_buffer(buffer)?;
        let n = self.resolution.get();
        info!(resolution = n, show_spectrum, "Running spectral pipeline");

        reporter.begin_stage(PipelineStage::Loading, Some(n));
        load_source(buffer, source);
        reporter.finish_stage();

        self.transform_reported(buffer, Direction::Forward, reporter)?;

        reporter.begin_stage(PipelineStage::Filtering, Some(n));
        apply_filter(buffer, transfer);
        reporter.finish_stage();

        if !show_spectrum {
            self.transform_reported(buffer, Direction::Inverse, reporter)?;
        }

        reporter.begin_stage(PipelineStage::Rendering, Some(n));
        let output = render(buffer, show_spectrum);
        reporter.finish_stage();

        info!("Spectral pipeline complete");
        Ok(output)
    }

    /// One dispatch per pass, in `pass_order(direction)`.
    fn transform_reported(
        &self,
        buffer: &mut SpectrumBuffer,
        direction: Direction,
        reporter: &dyn ProgressReporter,
    ) -> Result<()> {
        self.check_buffer(buffer)?;
        for axis in pass_order(direction) {
            reporter.begin_stage(
                PipelineStage::for_transform(axis, direction),
                Some(self.resolution.get()),
            );
            transform_axis(buffer.data_mut(), &self.engine, axis, direction);
            reporter.finish_stage();
        }
        Ok(())
    }
}

/// Load the configured image, run the pipeline, and save the result.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<ColorFrame> {
    let resolution = config.validate()?;
    let image = load_color_image(&config.input)?;
    info!(
        input = %config.input.display(),
        width = image.width(),
        height = image.height(),
        %resolution,
        filter = %config.filter.filter_type,
        strength = config.filter.strength,
        "Loaded input image"
    );

    let pipeline = SpectralPipeline::with_resolution(resolution);
    let output = pipeline.run_reported(&image, &config.filter, reporter.as_ref())?;

    save_color_image(&output, &config.output)?;
    info!(output = %config.output.display(), "Output saved");
    Ok(output)
}

/// Run the pipeline described by `config` without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<ColorFrame> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
