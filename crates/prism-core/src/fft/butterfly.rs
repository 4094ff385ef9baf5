use std::f32::consts::TAU;

use ndarray::{ArrayView1, ArrayViewMut1};
use num_complex::Complex32;

use crate::consts::RADIX;

use super::resolution::{Resolution, StagePlan};

/// Sign convention of a 1-D transform pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Unnormalized, twiddle exponent `-2πik/N`.
    Forward,
    /// Twiddle exponent `+2πik/N`, output divided by N.
    Inverse,
}

impl Direction {
    /// Sign of the twiddle angle.
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Inverse => write!(f, "inverse"),
        }
    }
}

/// Reverse the low `bits` bits of `index`.
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    index
        .reverse_bits()
        .checked_shr(usize::BITS - bits)
        .unwrap_or(0)
}

/// Length-N complex working array owned by one work-group for the duration
/// of a dispatch. Reused across every lane and channel that group handles.
#[derive(Clone, Debug)]
pub struct Scratch {
    data: Vec<Complex32>,
}

impl Scratch {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            data: vec![Complex32::new(0.0, 0.0); resolution.get()],
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex32] {
        &mut self.data
    }
}

/// In-place 1-D FFT over a scratch array: bit-reversal load, radix-4 stages,
/// radix-2 tail, and 1/N scaling on the inverse.
///
/// `R` is the butterfly radix. It is fixed at compile time; the crate-wide
/// engine is `ButterflyEngine<RADIX>`, built with [`ButterflyEngine::new`].
#[derive(Clone, Copy, Debug)]
pub struct ButterflyEngine<const R: usize = RADIX> {
    resolution: Resolution,
    plan: StagePlan,
}

impl ButterflyEngine<RADIX> {
    pub fn new(resolution: Resolution) -> Self {
        Self::with_radix(resolution)
    }
}

impl<const R: usize> ButterflyEngine<R> {
    pub fn with_radix(resolution: Resolution) -> Self {
        Self {
            resolution,
            plan: StagePlan::for_radix(resolution, R),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn plan(&self) -> StagePlan {
        self.plan
    }

    /// `scratch[bitrev(j)] = source[j]` for every j.
    pub fn load_bit_reversed(&self, scratch: &mut [Complex32], source: ArrayView1<'_, Complex32>) {
        debug_assert_eq!(scratch.len(), self.resolution.get());
        debug_assert_eq!(source.len(), self.resolution.get());
        let bits = self.resolution.log2();
        for (j, &value) in source.iter().enumerate() {
            scratch[bit_reverse(j, bits)] = value;
        }
    }

    /// Run every butterfly stage on a bit-reversed scratch array.
    ///
    /// Each stage reads values written by the previous one at other indices,
    /// so stages are strictly sequential; the loop boundary is the barrier.
    pub fn execute(&self, scratch: &mut [Complex32], direction: Direction) {
        let sign = direction.sign();
        let mut stride = 1;
        for _ in 0..self.plan.radix4_stages {
            radix4_stage(scratch, stride, sign);
            stride *= 4;
        }
        for _ in 0..self.plan.radix2_stages {
            radix2_stage(scratch, stride, sign);
            stride *= 2;
        }

        if direction == Direction::Inverse {
            let inv = 1.0 / self.resolution.get() as f32;
            for v in scratch.iter_mut() {
                *v = v.scale(inv);
            }
        }
    }

    pub fn store(&self, scratch: &[Complex32], mut dest: ArrayViewMut1<'_, Complex32>) {
        for (d, s) in dest.iter_mut().zip(scratch) {
            *d = *s;
        }
    }

    /// Load a lane into scratch, transform it, and write it back in place.
    pub fn transform(
        &self,
        mut lane: ArrayViewMut1<'_, Complex32>,
        scratch: &mut Scratch,
        direction: Direction,
    ) {
        let work = scratch.as_mut_slice();
        self.load_bit_reversed(work, lane.view());
        self.execute(work, direction);
        self.store(work, lane.view_mut());
    }

    /// Transform a contiguous slice of length N in place.
    pub fn transform_slice(&self, data: &mut [Complex32], direction: Direction) {
        let mut scratch = Scratch::new(self.resolution);
        self.transform(ArrayViewMut1::from(data), &mut scratch, direction);
    }
}

/// Multiply by `±i`: `sign = -1` rotates by -90°, `sign = +1` by +90°.
#[inline]
fn rotate_quarter(z: Complex32, sign: f32) -> Complex32 {
    Complex32::new(-sign * z.im, sign * z.re)
}

/// One radix-4 stage over groups of `4 * stride` elements.
///
/// The scratch array is in plain bit-reversed order, so within a group the
/// second and third quarters hold the inputs for DFT rows 2 and 1 and are
/// read swapped; outputs go back in natural quarter order.
fn radix4_stage(data: &mut [Complex32], stride: usize, sign: f32) {
    let span = 4 * stride;
    for base in (0..data.len()).step_by(span) {
        for k in 0..stride {
            let angle = sign * TAU * k as f32 / span as f32;
            let w1 = Complex32::cis(angle);
            let w2 = Complex32::cis(2.0 * angle);
            let w3 = Complex32::cis(3.0 * angle);

            let i0 = base + k;
            let i1 = i0 + stride;
            let i2 = i1 + stride;
            let i3 = i2 + stride;

            let x0 = data[i0];
            let t1 = w1 * data[i2];
            let t2 = w2 * data[i1];
            let t3 = w3 * data[i3];

            let even_sum = x0 + t2;
            let even_diff = x0 - t2;
            let odd_sum = t1 + t3;
            let odd_diff = rotate_quarter(t1 - t3, sign);

            data[i0] = even_sum + odd_sum;
            data[i1] = even_diff + odd_diff;
            data[i2] = even_sum - odd_sum;
            data[i3] = even_diff - odd_diff;
        }
    }
}

/// One radix-2 stage over groups of `2 * stride` elements.
fn radix2_stage(data: &mut [Complex32], stride: usize, sign: f32) {
    let span = 2 * stride;
    for base in (0..data.len()).step_by(span) {
        for k in 0..stride {
            let twiddle = Complex32::cis(sign * TAU * k as f32 / span as f32);
            let i0 = base + k;
            let i1 = i0 + stride;
            let x0 = data[i0];
            let t1 = twiddle * data[i1];
            data[i0] = x0 + t1;
            data[i1] = x0 - t1;
        }
    }
}
