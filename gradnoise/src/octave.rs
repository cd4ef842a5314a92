//! Fractal sums of the base evaluators.
//!
//! Band `b` of an `n`-band sum samples at `2^(b+1)` times the input frequency
//! and is weighted by the inverse of that divider. The last band is the
//! exception: it uses `2^b`, one doubling less, which weights the final two
//! bands equally. This departs from the textbook symmetric sum on purpose and
//! fields baked against existing seeds depend on it. A single band therefore
//! samples the base evaluator unscaled.

use std::num::NonZeroU32;

use gradnoise_config::OctaveConfig;
use gradnoise_util::NoiseMode;

use crate::{error::NoiseError, field::NoiseField};

/// A validated octave sum: evaluator plus band count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctaveSampler {
    mode: NoiseMode,
    iterations: NonZeroU32,
}

impl OctaveSampler {
    pub const fn new(mode: NoiseMode, iterations: NonZeroU32) -> Self {
        Self { mode, iterations }
    }

    pub fn from_config(config: &OctaveConfig) -> Self {
        Self::new(config.mode, config.iterations)
    }

    pub fn mode(&self) -> NoiseMode {
        self.mode
    }

    pub fn iterations(&self) -> NonZeroU32 {
        self.iterations
    }

    /// Frequency multiplier and amplitude divisor of `band`.
    pub fn divider(band: u32, iterations: u32) -> f64 {
        let exponent = if band + 1 == iterations { band } else { band + 1 };
        2f64.powi(i32::try_from(exponent).unwrap_or(i32::MAX))
    }

    pub fn sample(&self, field: &NoiseField, x: f64, y: f64, z: f64) -> f64 {
        let iterations = self.iterations.get();
        (0..iterations).fold(0f64, |value, band| {
            let divider = Self::divider(band, iterations);
            value + field.sample(self.mode, x * divider, y * divider, z * divider) / divider
        })
    }
}

impl NoiseField {
    /// Evaluates `mode` at the point, ignoring axes the evaluator does not read.
    #[inline]
    pub fn sample(&self, mode: NoiseMode, x: f64, y: f64, z: f64) -> f64 {
        match mode {
            NoiseMode::Classic1d => self.noise1d(x),
            NoiseMode::Classic2d => self.noise2d(x, y),
            NoiseMode::Classic3d => self.noise3d(x, y, z),
            NoiseMode::Simplex2d => self.simplex2d(x, y),
            NoiseMode::Simplex3d => self.simplex3d(x, y, z),
        }
    }

    /// Sums `iterations` bands of `mode`. Zero iterations is rejected.
    pub fn octave(
        &self,
        mode: NoiseMode,
        iterations: u32,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<f64, NoiseError> {
        let iterations = NonZeroU32::new(iterations).ok_or(NoiseError::ZeroIterations)?;
        Ok(OctaveSampler::new(mode, iterations).sample(self, x, y, z))
    }

    /// [`NoiseField::octave`] with the mode given as text (`p1` .. `s3` or the
    /// long names).
    pub fn octave_str(
        &self,
        mode: &str,
        iterations: u32,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<f64, NoiseError> {
        self.octave(mode.parse()?, iterations, x, y, z)
    }
}
