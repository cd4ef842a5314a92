use gradnoise_util::LatticeSize;
use log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

mod octave;

pub use octave::OctaveConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Couldn't parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Couldn't serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything needed to rebuild a noise field and its default octave sum.
///
/// Recording `seed` is what makes a field reproducible; when it is absent the
/// field draws one from host entropy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NoiseConfiguration {
    pub lattice: LatticeSize,
    pub seed: Option<f64>,
    pub octave: OctaveConfig,
}

impl NoiseConfiguration {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

pub trait LoadConfiguration {
    /// Reads the configuration from `config_dir`, writing the default there
    /// first if no file exists yet.
    fn load(config_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&file_content)?
        } else {
            let content = Self::default();
            let serialized = toml::to_string(&content)?;

            if let Err(err) =
                fs::create_dir_all(config_dir).and_then(|()| fs::write(&path, serialized))
            {
                warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
            } else {
                log::debug!("wrote default config to {:?}", &path);
            }

            content
        };

        config.validate();
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadConfiguration for NoiseConfiguration {
    fn get_path() -> &'static Path {
        Path::new("gradnoise.toml")
    }

    fn validate(&self) {
        if let Some(seed) = self.seed {
            if !seed.is_finite() {
                warn!("Configured seed {seed} is not finite; it seeds like 0");
            }
        }
    }
}
