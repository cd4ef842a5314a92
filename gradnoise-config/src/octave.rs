use std::num::NonZeroU32;

use gradnoise_util::NoiseMode;
use serde::{Deserialize, Serialize};

/// Default fractal settings for callers that sample a configured octave sum.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OctaveConfig {
    pub mode: NoiseMode,
    /// Number of frequency bands summed. Zero is rejected when parsing.
    pub iterations: NonZeroU32,
}

impl Default for OctaveConfig {
    fn default() -> Self {
        Self {
            mode: NoiseMode::Simplex3d,
            iterations: NonZeroU32::MIN.saturating_add(3),
        }
    }
}
