//! Seed loader
//!
//! Decides where the quest description comes from:
//! - an explicit path given on the command line
//! - `<config dir>/village-rescue/seed.json` if the player created one
//! - the built-in quest otherwise

use super::types::{SeedData, SeedError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "village-rescue";

/// Seed file name inside the config directory
pub const SEED_FILE_NAME: &str = "seed.json";

/// Where a loaded seed came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    File(PathBuf),
    BuiltIn,
}

pub struct SeedLoader {
    config_dir: Option<PathBuf>,
}

impl SeedLoader {
    /// Creates a loader that looks in the platform config directory
    pub fn new() -> Self {
        SeedLoader {
            config_dir: dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME)),
        }
    }

    /// Creates a loader that looks in a specific directory instead
    pub fn with_config_dir(config_dir: impl AsRef<Path>) -> Self {
        SeedLoader {
            config_dir: Some(config_dir.as_ref().to_path_buf()),
        }
    }

    /// Path of the user seed file, whether or not it exists
    pub fn default_seed_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(SEED_FILE_NAME))
    }

    /// Loads the seed to play with
    ///
    /// An explicit path must exist; the config-dir file is optional.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<(SeedData, SeedSource), SeedError> {
        if let Some(path) = explicit {
            let seed = Self::load(path)?;
            return Ok((seed, SeedSource::File(path.to_path_buf())));
        }

        match self.default_seed_path() {
            Some(path) if path.is_file() => {
                let seed = Self::load(&path)?;
                Ok((seed, SeedSource::File(path)))
            }
            _ => {
                tracing::debug!("No seed file found, using built-in quest");
                Ok((SeedData::default_quest(), SeedSource::BuiltIn))
            }
        }
    }

    /// Reads and validates a seed file
    pub fn load(path: &Path) -> Result<SeedData, SeedError> {
        let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let seed = SeedData::from_json(&json)?;
        tracing::debug!("Loaded seed from {} ({} villages)", path.display(), seed.villages.len());
        Ok(seed)
    }

    /// Writes the built-in quest to the config directory so it can be edited
    pub fn write_default(&self) -> Result<Option<PathBuf>, SeedError> {
        let Some(path) = self.default_seed_path() else {
            return Ok(None);
        };

        let io_error = |source| SeedError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&path, SeedData::default_quest().to_json_pretty()?).map_err(io_error)?;

        Ok(Some(path))
    }
}

impl Default for SeedLoader {
    fn default() -> Self {
        Self::new()
    }
}
