pub mod frequency;

pub use frequency::{apply_filter, FilterParams, FilterType, Passthrough, Transfer};
