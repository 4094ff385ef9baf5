#![allow(dead_code)]

use ndarray::Array2;
use num_complex::Complex;

use prism_core::frame::ColorFrame;

/// Deterministic pseudo-random values in [0, 1) (64-bit LCG).
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32) / (1u64 << 24) as f32
    }
}

pub fn make_noise_array(n: usize, seed: u64) -> Array2<f32> {
    let mut rng = Lcg::new(seed);
    Array2::from_shape_fn((n, n), |_| rng.next_f32())
}

/// Three independent noise channels.
pub fn make_noise_image(n: usize, seed: u64) -> ColorFrame {
    ColorFrame::from_channels(
        make_noise_array(n, seed),
        make_noise_array(n, seed + 1),
        make_noise_array(n, seed + 2),
    )
}

pub fn make_uniform_image(n: usize, r: f32, g: f32, b: f32) -> ColorFrame {
    ColorFrame::from_channels(
        Array2::from_elem((n, n), r),
        Array2::from_elem((n, n), g),
        Array2::from_elem((n, n), b),
    )
}

/// The literal single-impulse image: 1.0 at (0, 0), zero elsewhere, all channels.
pub fn make_impulse_image(n: usize) -> ColorFrame {
    let mut data = Array2::<f32>::zeros((n, n));
    data[[0, 0]] = 1.0;
    ColorFrame::from_channels(data.clone(), data.clone(), data)
}

/// Direct O(N^4) 2-D DFT: `X[ky][kx] = sum x[y][x] e^{-2 pi i (kx x + ky y) / N}`.
pub fn naive_dft_2d(data: &Array2<f32>) -> Array2<Complex<f64>> {
    let n = data.nrows();
    let tau = std::f64::consts::TAU;
    Array2::from_shape_fn((n, n), |(ky, kx)| {
        let mut sum = Complex::new(0.0, 0.0);
        for y in 0..n {
            for x in 0..n {
                let phase = -tau * ((kx * x + ky * y) % n) as f64 / n as f64;
                sum += Complex::from_polar(data[[y, x]] as f64, phase);
            }
        }
        sum
    })
}

pub fn mean(data: &Array2<f32>) -> f64 {
    data.iter().map(|&v| v as f64).sum::<f64>() / data.len() as f64
}

pub fn variance(data: &Array2<f32>) -> f64 {
    let m = mean(data);
    data.iter().map(|&v| (v as f64 - m).powi(2)).sum::<f64>() / data.len() as f64
}

pub fn max_abs_diff(a: &Array2<f32>, b: &Array2<f32>) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}
