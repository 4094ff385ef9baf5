use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_RESOLUTION;
use crate::error::{PrismError, Result};
use crate::fft::Resolution;
use crate::filters::FilterParams;
use crate::io::image_io::is_supported_output;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Transform size N; the input is resampled to N x N.
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    #[serde(default)]
    pub filter: FilterParams,
}

fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("filtered.png"),
            resolution: DEFAULT_RESOLUTION,
            filter: FilterParams::default(),
        }
    }
}

impl PipelineConfig {
    /// Check everything a run depends on before any work is scheduled.
    pub fn validate(&self) -> Result<Resolution> {
        let resolution = Resolution::new(self.resolution)?;
        self.filter.validate()?;
        if !is_supported_output(&self.output) {
            return Err(PrismError::Config(format!(
                "unsupported output format: {} (use .png, .tif or .tiff)",
                self.output.display()
            )));
        }
        Ok(resolution)
    }
}
