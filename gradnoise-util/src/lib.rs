pub mod lattice;
pub mod math;
pub mod mode;
pub mod noise;
pub mod random;

pub use lattice::LatticeSize;
pub use mode::{NoiseMode, ParseNoiseModeError};

/// Fails unless `$x` and `$y` are within `$d` of each other.
#[macro_export]
macro_rules! assert_eq_delta {
    ($x:expr, $y:expr, $d:expr) => {
        if ($x - $y).abs() > $d {
            panic!("{} vs {} ({} vs {})", $x, $y, ($x - $y).abs(), $d);
        }
    };
}
