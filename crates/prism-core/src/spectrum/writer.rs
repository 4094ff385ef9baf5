use ndarray::{Array3, Axis};

use crate::consts::{CHANNEL_COUNT, SPECTRUM_LOG_GAIN};
use crate::frame::ColorFrame;

use super::{for_each_row, shifted_index, SpectrumBuffer};

/// `log(1 + g*m) / log(1 + g)` clamped to [0, 1].
pub fn log_magnitude(magnitude: f32) -> f32 {
    ((1.0 + SPECTRUM_LOG_GAIN * magnitude).ln() / (1.0 + SPECTRUM_LOG_GAIN).ln()).clamp(0.0, 1.0)
}

/// Produce display values in [0, 1].
///
/// With `show_spectrum` the buffer is read as a spectrum, DC moved to the
/// center and magnitudes log-compressed. Otherwise it is read as an image
/// and the real part is kept; the imaginary residue of the inverse is dropped.
pub fn render(buffer: &SpectrumBuffer, show_spectrum: bool) -> ColorFrame {
    let n = buffer.resolution().get();
    let data = buffer.data();
    let mut out = Array3::<f32>::zeros((CHANNEL_COUNT, n, n));

    for_each_row(&mut out, |row, mut view| {
        for col in 0..n {
            for channel in 0..CHANNEL_COUNT {
                view[[channel, col]] = if show_spectrum {
                    let value = data[[channel, shifted_index(row, n), shifted_index(col, n)]];
                    log_magnitude(value.norm())
                } else {
                    data[[channel, row, col]].re.clamp(0.0, 1.0)
                };
            }
        }
    });

    ColorFrame::from_channels(
        out.index_axis(Axis(0), 0).to_owned(),
        out.index_axis(Axis(0), 1).to_owned(),
        out.index_axis(Axis(0), 2).to_owned(),
    )
}
