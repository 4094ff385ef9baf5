use num_complex::Complex32;

use crate::frame::ImageSource;

use super::{for_each_row, SpectrumBuffer};

/// Fill the buffer with `(sample, 0)` per channel, sampling the source at
/// the pixel centers of an N x N grid.
pub fn load_source<S: ImageSource + ?Sized>(buffer: &mut SpectrumBuffer, source: &S) {
    let n = buffer.resolution().get();
    let step = 1.0 / n as f64;

    for_each_row(buffer.data_mut(), |row, mut view| {
        let v = (row as f64 + 0.5) * step;
        for col in 0..n {
            let u = (col as f64 + 0.5) * step;
            let sample = source.sample(u, v);
            for (channel, value) in sample.into_iter().enumerate() {
                view[[channel, col]] = Complex32::new(value, 0.0);
            }
        }
    });
}
