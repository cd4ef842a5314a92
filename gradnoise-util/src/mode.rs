use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The evaluator an octave sum is built from.
///
/// Textual form is the short code (`p1`, `p2`, `p3`, `s2`, `s3`); the long names
/// (`classic-1d` ... `simplex-3d`) are accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseMode {
    #[serde(rename = "p1", alias = "classic-1d")]
    Classic1d,
    #[serde(rename = "p2", alias = "classic-2d")]
    Classic2d,
    #[serde(rename = "p3", alias = "classic-3d")]
    Classic3d,
    #[serde(rename = "s2", alias = "simplex-2d")]
    Simplex2d,
    #[serde(rename = "s3", alias = "simplex-3d")]
    Simplex3d,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown noise mode `{0}`, expected one of p1, p2, p3, s2, s3")]
pub struct ParseNoiseModeError(pub String);

impl NoiseMode {
    pub const ALL: [NoiseMode; 5] = [
        Self::Classic1d,
        Self::Classic2d,
        Self::Classic3d,
        Self::Simplex2d,
        Self::Simplex3d,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Classic1d => "p1",
            Self::Classic2d => "p2",
            Self::Classic3d => "p3",
            Self::Simplex2d => "s2",
            Self::Simplex3d => "s3",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic1d => "classic-1d",
            Self::Classic2d => "classic-2d",
            Self::Classic3d => "classic-3d",
            Self::Simplex2d => "simplex-2d",
            Self::Simplex3d => "simplex-3d",
        }
    }

    /// Number of coordinates the evaluator reads.
    pub const fn dimensions(self) -> usize {
        match self {
            Self::Classic1d => 1,
            Self::Classic2d | Self::Simplex2d => 2,
            Self::Classic3d | Self::Simplex3d => 3,
        }
    }

    pub const fn is_simplex(self) -> bool {
        matches!(self, Self::Simplex2d | Self::Simplex3d)
    }
}

impl FromStr for NoiseMode {
    type Err = ParseNoiseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.code() == s || mode.name() == s)
            .ok_or_else(|| ParseNoiseModeError(s.to_string()))
    }
}

impl fmt::Display for NoiseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
