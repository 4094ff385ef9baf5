pub mod consts;
pub mod error;
pub mod fft;
pub mod filters;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod spectrum;
