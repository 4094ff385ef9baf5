//! The per-channel complex spectrum and the stages that fill and read it.

pub mod buffer;
pub mod loader;
pub mod writer;

use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayViewMut2, Axis};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

pub use buffer::SpectrumBuffer;
pub use loader::load_source;
pub use writer::{log_magnitude, render};

/// Signed frequency stored at `index`: `(index + N/2) mod N - N/2`.
pub fn centered_frequency(index: usize, n: usize) -> i32 {
    let half = n / 2;
    ((index + half) % n) as i32 - half as i32
}

/// Storage index shown at display position `display` when the spectrum is
/// drawn with DC in the center.
pub fn shifted_index(display: usize, n: usize) -> usize {
    (display + n / 2) % n
}

/// Visit every row of a `[channel][row][col]` array as a `(channel, col)`
/// view, across Rayon tasks once the image is large enough.
pub(crate) fn for_each_row<T, F>(data: &mut Array3<T>, f: F)
where
    T: Send + Sync,
    F: Fn(usize, ArrayViewMut2<'_, T>) + Sync + Send,
{
    let (_, h, w) = data.dim();
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        data.axis_iter_mut(Axis(1))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, view)| f(row, view));
    } else {
        for (row, view) in data.axis_iter_mut(Axis(1)).enumerate() {
            f(row, view);
        }
    }
}
