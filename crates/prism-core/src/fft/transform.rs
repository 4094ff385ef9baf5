use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayViewMut2, Axis};
use num_complex::Complex32;
use tracing::debug;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

use super::butterfly::{ButterflyEngine, Direction, Scratch};

/// Which 1-D lanes of a `[channel][row][col]` buffer a dispatch transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformAxis {
    /// One work-group per row, transforming along columns within the row.
    Row,
    /// One work-group per column, transforming down the rows.
    Column,
}

impl TransformAxis {
    /// Axis whose index identifies the work-group.
    fn group_axis(self) -> Axis {
        match self {
            Self::Row => Axis(1),
            Self::Column => Axis(2),
        }
    }
}

impl std::fmt::Display for TransformAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// One dispatch: transform every row (or column) of every channel.
///
/// Each work-group owns one row/column across all channels and one scratch
/// array. The call returns only after every group has finished, which is the
/// pipeline barrier the next dispatch relies on.
pub fn transform_axis(
    data: &mut Array3<Complex32>,
    engine: &ButterflyEngine,
    axis: TransformAxis,
    direction: Direction,
) {
    let resolution = engine.resolution();
    let n = resolution.get();
    let group_axis = axis.group_axis();
    let parallel = n * n >= PARALLEL_PIXEL_THRESHOLD;

    debug!(
        %axis,
        %direction,
        groups = data.len_of(group_axis),
        parallel,
        "Dispatching 1-D transforms"
    );

    if parallel {
        data.axis_iter_mut(group_axis).into_par_iter().for_each_init(
            || Scratch::new(resolution),
            |scratch, group| run_group(engine, scratch, group, direction),
        );
    } else {
        let mut scratch = Scratch::new(resolution);
        for group in data.axis_iter_mut(group_axis) {
            run_group(engine, &mut scratch, group, direction);
        }
    }
}

/// Channels are processed one after another through the same scratch array.
fn run_group(
    engine: &ButterflyEngine,
    scratch: &mut Scratch,
    mut group: ArrayViewMut2<'_, Complex32>,
    direction: Direction,
) {
    for lane in group.outer_iter_mut() {
        engine.transform(lane, scratch, direction);
    }
}

/// Order of the two 1-D passes of a 2-D transform: rows then columns
/// forward, columns then rows inverse.
pub fn pass_order(direction: Direction) -> [TransformAxis; 2] {
    match direction {
        Direction::Forward => [TransformAxis::Row, TransformAxis::Column],
        Direction::Inverse => [TransformAxis::Column, TransformAxis::Row],
    }
}
