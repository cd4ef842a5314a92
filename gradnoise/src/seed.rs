use gradnoise_util::{LatticeSize, random::entropy_fraction};

const WORD_MODULUS: f64 = 4294967296f64;

/// A seed as handed in by the caller.
///
/// Any real number is accepted. Fractions strictly between 0 and 1 are scaled
/// to the lattice's seed range; everything else is floored and wrapped to a
/// 32-bit two's-complement word.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Seed(pub f64);

impl Seed {
    /// A fraction drawn from host entropy.
    pub fn random() -> Self {
        Self(entropy_fraction())
    }

    /// The word whose low and high bytes perturb the base permutation.
    pub fn word(self, lattice: LatticeSize) -> i32 {
        let mut value = self.0;
        if value > 0.0 && value < 1.0 {
            value *= lattice.seed_range();
        }

        let value = value.floor();
        let mut word = if value.is_finite() {
            value.rem_euclid(WORD_MODULUS) as u32 as i32
        } else {
            0
        };

        // Small seeds would leave the high byte empty and only ever touch the
        // even half of the table.
        if value < lattice.size() as f64 {
            word |= word << 8;
        }
        word
    }
}

macro_rules! seed_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Seed {
                fn from(value: $ty) -> Self {
                    Self(value as f64)
                }
            }
        )*
    };
}

seed_from!(f64, f32, i32, u32, i64, u64);
