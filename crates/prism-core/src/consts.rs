/// Largest supported transform length along either axis.
pub const N_MAX: u32 = 2048;

/// Radix of the butterfly decomposition compiled into the engine (4 or 2).
/// With 4, an odd `log2(N)` is finished by a single radix-2 stage.
pub const RADIX: usize = 4;

/// Number of channels carried through the spectrum buffer (R, G, B).
pub const CHANNEL_COUNT: usize = 3;

/// Minimum pixel count (N*N) to run a dispatch across Rayon tasks.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Butterworth order shared by the low-pass and high-pass filters.
pub const BUTTERWORTH_ORDER: i32 = 7;

/// Lower bound applied to `1 - strength` so cutoffs and widths never collapse.
pub const STRENGTH_FLOOR: f32 = 0.01;

/// Floor on the normalized frequency in the high-pass denominator.
pub const FREQUENCY_FLOOR: f32 = 0.001;

/// Gain inside the log compression of the spectrum view: log(1 + g*|X|) / log(1 + g).
pub const SPECTRUM_LOG_GAIN: f32 = 30.0;

/// Default transform size used by configs and the CLI.
pub const DEFAULT_RESOLUTION: u32 = 512;
