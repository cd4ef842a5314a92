use gradnoise_util::ParseNoiseModeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    #[error(transparent)]
    UnknownMode(#[from] ParseNoiseModeError),
    #[error("An octave sum needs at least one iteration")]
    ZeroIterations,
}
