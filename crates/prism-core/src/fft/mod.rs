//! Radix-4/radix-2 FFT engine and the row/column dispatches built on it.

pub mod butterfly;
pub mod resolution;
pub mod transform;

pub use butterfly::{bit_reverse, ButterflyEngine, Direction, Scratch};
pub use resolution::{Resolution, StagePlan};
pub use transform::{pass_order, transform_axis, TransformAxis};
