use serde::{Deserialize, Serialize};

use crate::math::wrap_floored;

/// Supported lattice resolutions.
///
/// The lattice size `N` is the period of the classic noise field along every
/// axis and the length of the base permutation. The seed range is the value a
/// fractional seed in `(0, 1)` is scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatticeSize {
    /// 256 cells, 16-bit seed range.
    Small,
    /// 1024 cells, 32-bit seed range.
    #[default]
    Large,
}

impl LatticeSize {
    pub const fn size(self) -> usize {
        match self {
            Self::Small => 256,
            Self::Large => 1024,
        }
    }

    #[inline]
    pub const fn mask(self) -> usize {
        self.size() - 1
    }

    pub const fn seed_range(self) -> f64 {
        match self {
            Self::Small => 65536f64,
            Self::Large => 4294967296f64,
        }
    }

    /// Lattice cell of a floored coordinate.
    #[inline]
    pub fn wrap(self, floored: f64) -> usize {
        wrap_floored(floored, self.size())
    }
}
