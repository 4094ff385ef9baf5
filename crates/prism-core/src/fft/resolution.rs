use serde::{Deserialize, Serialize};

use crate::consts::{N_MAX, RADIX};
use crate::error::{PrismError, Result};

/// Transform length along each axis of the square spectrum.
///
/// Always a power of two in `1..=N_MAX`; every buffer index in the engine
/// relies on that, so the only way to build one is through [`Resolution::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Resolution(u32);

impl Resolution {
    pub fn new(n: u32) -> Result<Self> {
        if n > N_MAX {
            return Err(PrismError::ResolutionTooLarge { n, max: N_MAX });
        }
        if !n.is_power_of_two() {
            return Err(PrismError::InvalidResolution { n, max: N_MAX });
        }
        Ok(Self(n))
    }

    /// Transform length N.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// N / 2, the Nyquist offset used by fftshift.
    pub fn half(self) -> usize {
        self.get() / 2
    }

    /// Stage counts for the compiled radix.
    pub fn stage_plan(self) -> StagePlan {
        StagePlan::for_radix(self, RADIX)
    }
}

impl TryFrom<u32> for Resolution {
    type Error = PrismError;

    fn try_from(n: u32) -> Result<Self> {
        Self::new(n)
    }
}

impl From<Resolution> for u32 {
    fn from(r: Resolution) -> u32 {
        r.0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// How a length-N transform decomposes into butterfly stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagePlan {
    pub radix4_stages: u32,
    pub radix2_stages: u32,
}

impl StagePlan {
    /// Radix 4 takes `log2 / 2` stages and leaves one radix-2 stage when
    /// `log2` is odd. Any other radix falls back to pure radix-2.
    pub fn for_radix(resolution: Resolution, radix: usize) -> Self {
        let log2 = resolution.log2();
        if radix == 4 {
            Self {
                radix4_stages: log2 / 2,
                radix2_stages: log2 % 2,
            }
        } else {
            Self {
                radix4_stages: 0,
                radix2_stages: log2,
            }
        }
    }

    pub fn total_stages(&self) -> u32 {
        self.radix4_stages + self.radix2_stages
    }
}
