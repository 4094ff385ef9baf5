use num_complex::Complex32;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{BUTTERWORTH_ORDER, FREQUENCY_FLOOR, STRENGTH_FLOOR};
use crate::error::{PrismError, Result};
use crate::fft::Resolution;
use crate::spectrum::{centered_frequency, for_each_row, SpectrumBuffer};

/// Transfer function applied to the spectrum. Discriminants match the
/// integer codes hosts pass in their parameter block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterType {
    #[default]
    LowPass = 0,
    HighPass = 1,
    BandPass = 2,
    Directional = 3,
}

impl TryFrom<u32> for FilterType {
    type Error = PrismError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            0 => Ok(Self::LowPass),
            1 => Ok(Self::HighPass),
            2 => Ok(Self::BandPass),
            3 => Ok(Self::Directional),
            other => Err(PrismError::InvalidFilterType(other)),
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowPass => write!(f, "Low-pass"),
            Self::HighPass => write!(f, "High-pass"),
            Self::BandPass => write!(f, "Band-pass"),
            Self::Directional => write!(f, "Directional"),
        }
    }
}

/// Host-supplied filter settings, fixed for one pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub filter_type: FilterType,
    /// 0.0..=1.0; higher is more aggressive for every filter type.
    pub strength: f32,
    /// Pass direction in radians (directional filter).
    pub direction: f32,
    /// Center frequency of the band-pass, normalized so Nyquist = 1.0.
    pub radius: f32,
    /// Render the log-magnitude spectrum instead of the filtered image.
    pub show_spectrum: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            filter_type: FilterType::LowPass,
            strength: 0.5,
            direction: 0.0,
            radius: 0.3,
            show_spectrum: false,
        }
    }
}

impl FilterParams {
    pub fn validate(&self) -> Result<()> {
        if !self.strength.is_finite() || !(0.0..=1.0).contains(&self.strength) {
            return Err(PrismError::InvalidParameter {
                name: "strength",
                value: self.strength,
            });
        }
        if !self.direction.is_finite() {
            return Err(PrismError::InvalidParameter {
                name: "direction",
                value: self.direction,
            });
        }
        if !self.radius.is_finite() {
            return Err(PrismError::InvalidParameter {
                name: "radius",
                value: self.radius,
            });
        }
        Ok(())
    }

    /// `1 - strength`, floored so cutoffs and widths stay positive.
    fn softness(&self) -> f32 {
        (1.0 - self.strength).max(STRENGTH_FLOOR)
    }
}

/// Real gain applied to the frequency bin `(fx, fy)` (signed, fftshift-centered).
pub trait Transfer: Sync {
    fn scale(&self, fx: i32, fy: i32, resolution: Resolution) -> f32;
}

impl Transfer for FilterParams {
    fn scale(&self, fx: i32, fy: i32, resolution: Resolution) -> f32 {
        let f = normalized_radius(fx, fy, resolution);
        match self.filter_type {
            FilterType::LowPass => {
                let cutoff = 0.5 * self.softness();
                butterworth(f / cutoff)
            }
            FilterType::HighPass => {
                let cutoff = 0.1 + 0.3 * self.strength;
                butterworth(cutoff / f.max(FREQUENCY_FLOOR))
            }
            FilterType::BandPass => {
                let bandwidth = 0.05 + 0.2 * self.softness();
                gaussian((f - self.radius) / bandwidth)
            }
            FilterType::Directional => {
                let width = 0.1 + self.softness();
                let angle = (fy as f32).atan2(fx as f32);
                gaussian((angle - self.direction).sin() / width)
            }
        }
    }
}

/// Unit gain everywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Transfer for Passthrough {
    fn scale(&self, _fx: i32, _fy: i32, _resolution: Resolution) -> f32 {
        1.0
    }
}

/// `|(fx, fy)| / (N/2)`, so the Nyquist edge maps to 1.0.
pub fn normalized_radius(fx: i32, fy: i32, resolution: Resolution) -> f32 {
    let half = resolution.half().max(1) as f32;
    (fx as f32).hypot(fy as f32) / half
}

/// `1 / (1 + x^(2*order))`.
fn butterworth(x: f32) -> f32 {
    1.0 / (1.0 + x.powi(2 * BUTTERWORTH_ORDER))
}

fn gaussian(x: f32) -> f32 {
    (-(x * x)).exp()
}

/// Multiply every bin of every channel by the transfer gain of its frequency.
/// Values stay at their storage index; the centered coordinate only feeds
/// the gain.
pub fn apply_filter<T: Transfer + ?Sized>(buffer: &mut SpectrumBuffer, transfer: &T) {
    let resolution = buffer.resolution();
    let n = resolution.get();
    debug!(resolution = n, "Applying frequency-domain filter");

    for_each_row(buffer.data_mut(), |row, mut view| {
        let fy = centered_frequency(row, n);
        for col in 0..n {
            let fx = centered_frequency(col, n);
            let gain = transfer.scale(fx, fy, resolution);
            view.column_mut(col).mapv_inplace(|bin: Complex32| bin * gain);
        }
    });
}
