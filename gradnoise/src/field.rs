use std::fmt;

use gradnoise_config::NoiseConfiguration;
use gradnoise_util::LatticeSize;

use crate::{permutation::PermutationTable, seed::Seed};

/// A seeded gradient-noise field.
///
/// Owns its permutation and gradient tables. Evaluation borrows the field
/// immutably and may run from any number of threads; `reseed` needs exclusive
/// access.
#[derive(Clone)]
pub struct NoiseField {
    pub(crate) table: PermutationTable,
    seed: Seed,
}

impl NoiseField {
    /// Builds a field seeded from host entropy. Read the seed back with
    /// [`NoiseField::seed`] to reproduce it later.
    pub fn new(lattice: LatticeSize) -> Self {
        let seed = Seed::random();
        log::debug!("no seed supplied, drew {}", seed.0);
        Self::with_seed(lattice, seed)
    }

    pub fn with_seed(lattice: LatticeSize, seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        Self {
            table: PermutationTable::new(lattice, seed),
            seed,
        }
    }

    pub fn from_config(config: &NoiseConfiguration) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.lattice, seed),
            None => Self::new(config.lattice),
        }
    }

    /// Rebuilds both tables for `seed`. Nothing from the previous seed survives.
    pub fn reseed(&mut self, seed: impl Into<Seed>) {
        let seed = seed.into();
        self.table.seed(seed);
        self.seed = seed;
    }

    /// The seed the tables were last derived from.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn lattice(&self) -> LatticeSize {
        self.table.lattice()
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(LatticeSize::default())
    }
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField")
            .field("lattice", &self.lattice())
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
