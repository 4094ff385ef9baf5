use crate::fft::{Direction, TransformAxis};

/// One dispatch of the spectral pipeline, used for progress reporting.
///
/// Declared in execution order: load, forward row/column, filter, inverse
/// column/row, render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    RowForward,
    ColumnForward,
    Filtering,
    ColumnInverse,
    RowInverse,
    Rendering,
}

impl PipelineStage {
    /// Full dispatch order for an image run.
    pub const IMAGE_SEQUENCE: [PipelineStage; 7] = [
        Self::Loading,
        Self::RowForward,
        Self::ColumnForward,
        Self::Filtering,
        Self::ColumnInverse,
        Self::RowInverse,
        Self::Rendering,
    ];

    /// Stage reported for one 1-D transform pass.
    pub fn for_transform(axis: TransformAxis, direction: Direction) -> Self {
        match (axis, direction) {
            (TransformAxis::Row, Direction::Forward) => Self::RowForward,
            (TransformAxis::Column, Direction::Forward) => Self::ColumnForward,
            (TransformAxis::Column, Direction::Inverse) => Self::ColumnInverse,
            (TransformAxis::Row, Direction::Inverse) => Self::RowInverse,
        }
    }

    /// Dispatch order when the filtered spectrum itself is displayed.
    pub const SPECTRUM_SEQUENCE: [PipelineStage; 5] = [
        Self::Loading,
        Self::RowForward,
        Self::ColumnForward,
        Self::Filtering,
        Self::Rendering,
    ];
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading image"),
            Self::RowForward => write!(f, "FFT rows"),
            Self::ColumnForward => write!(f, "FFT columns"),
            Self::Filtering => write!(f, "Filtering spectrum"),
            Self::ColumnInverse => write!(f, "Inverse FFT columns"),
            Self::RowInverse => write!(f, "Inverse FFT rows"),
            Self::Rendering => write!(f, "Rendering output"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A dispatch has started. `total_items` is the number of work-groups
    /// it runs, if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// The current dispatch has retired.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when no UI is attached.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
