use ndarray::{Array3, ArrayView2, Axis};
use num_complex::Complex32;

use crate::consts::CHANNEL_COUNT;
use crate::fft::Resolution;

/// Complex values shaped `[channel][row][col]`, `N x N` per channel.
///
/// Owned by one pipeline run and mutated in place by every stage. Can be
/// handed back to [`SpectrumBuffer::reset`] and reused for the next run.
#[derive(Clone, Debug)]
pub struct SpectrumBuffer {
    resolution: Resolution,
    data: Array3<Complex32>,
}

impl SpectrumBuffer {
    pub fn zeros(resolution: Resolution) -> Self {
        let n = resolution.get();
        Self {
            resolution,
            data: Array3::zeros((CHANNEL_COUNT, n, n)),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn data(&self) -> &Array3<Complex32> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Array3<Complex32> {
        &mut self.data
    }

    pub fn get(&self, channel: usize, row: usize, col: usize) -> Complex32 {
        self.data[[channel, row, col]]
    }

    pub fn channel(&self, channel: usize) -> ArrayView2<'_, Complex32> {
        self.data.index_axis(Axis(0), channel)
    }

    /// Zero every value so the buffer can serve another run.
    pub fn reset(&mut self) {
        self.data.fill(Complex32::new(0.0, 0.0));
    }

    /// Sum of squared magnitudes over one channel.
    pub fn energy(&self, channel: usize) -> f64 {
        self.channel(channel)
            .iter()
            .map(|v| v.norm_sqr() as f64)
            .sum()
    }
}
