//! Seeded, deterministic gradient noise.
//!
//! A [`NoiseField`] is built once from a [`LatticeSize`] and a [`Seed`] and can
//! then be sampled any number of times:
//!
//! - classic lattice noise: [`NoiseField::noise1d`], [`NoiseField::noise2d`],
//!   [`NoiseField::noise3d`]
//! - simplex noise: [`NoiseField::simplex2d`], [`NoiseField::simplex3d`]
//! - fractal sums of either: [`NoiseField::octave`], [`OctaveSampler`]
//!
//! The same lattice, seed and coordinates always produce the same bits.

mod classic;
mod error;
mod field;
mod octave;
mod permutation;
mod seed;
mod simplex;

pub use error::NoiseError;
pub use field::NoiseField;
pub use octave::OctaveSampler;
pub use permutation::PermutationTable;
pub use seed::Seed;

pub use gradnoise_config::{NoiseConfiguration, OctaveConfig};
pub use gradnoise_util::{LatticeSize, NoiseMode, ParseNoiseModeError, noise::Gradient};
