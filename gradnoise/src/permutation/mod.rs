use gradnoise_util::{
    LatticeSize,
    noise::{GRADIENTS, Gradient},
};

use crate::seed::Seed;

mod base;

/// Seeded permutation and gradient tables.
///
/// Both tables hold `2N` entries with the second half mirroring the first, so
/// chained lookups such as `perm[x + perm[y]]` never need to wrap.
#[derive(Clone)]
pub struct PermutationTable {
    lattice: LatticeSize,
    perm: Box<[u16]>,
    gradients: Box<[&'static Gradient]>,
}

impl PermutationTable {
    pub fn new(lattice: LatticeSize, seed: Seed) -> Self {
        let len = 2 * lattice.size();
        let mut table = Self {
            lattice,
            perm: vec![0; len].into_boxed_slice(),
            gradients: vec![&GRADIENTS[0]; len].into_boxed_slice(),
        };
        table.seed(seed);
        table
    }

    /// The unseeded permutation every table starts from.
    pub fn base(lattice: LatticeSize) -> &'static [u16] {
        match lattice {
            LatticeSize::Small => &base::BASE_SMALL,
            LatticeSize::Large => &base::BASE_LARGE,
        }
    }

    /// Re-derives both tables from the base permutation.
    pub fn seed(&mut self, seed: Seed) {
        let size = self.lattice.size();
        let mask = self.lattice.mask() as i32;
        let word = seed.word(self.lattice);
        let low = (word & mask) as u16;
        let high = ((word >> 8) & mask) as u16;

        log::debug!(
            "seeding {:?} lattice with {} (word {word:#010x})",
            self.lattice,
            seed.0
        );

        for (i, &base) in Self::base(self.lattice).iter().enumerate() {
            let value = base ^ if i & 1 == 1 { low } else { high };
            let gradient = Gradient::for_hash(value as usize);

            self.perm[i] = value;
            self.perm[i + size] = value;
            self.gradients[i] = gradient;
            self.gradients[i + size] = gradient;
        }
    }

    #[inline]
    pub fn lattice(&self) -> LatticeSize {
        self.lattice
    }

    /// Permutation entry at `index`, which must be below `2N`.
    #[inline]
    pub fn perm(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Gradient entry at `index`, which must be below `2N`.
    #[inline]
    pub fn gradient(&self, index: usize) -> &'static Gradient {
        self.gradients[index]
    }

    pub fn perm_values(&self) -> &[u16] {
        &self.perm
    }

    pub fn gradient_values(&self) -> &[&'static Gradient] {
        &self.gradients
    }
}
