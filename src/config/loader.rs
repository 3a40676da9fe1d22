use super::{get_global_config_dir, Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves and reads the configuration file, then layers environment overrides on top.
///
/// Lookup order: an explicit path, `french-numbers.toml` in the working
/// directory, `config.toml` in the per-user config directory, built-in defaults.
pub struct ConfigLoader {
    working_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            working_dir: std::env::current_dir()?,
            global_dir: get_global_config_dir(),
        })
    }

    pub fn with_dirs(working_dir: impl Into<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            global_dir,
        }
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        self.load_with_env(explicit, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, explicit: Option<&Path>, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.locate(explicit)? {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::load_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        config.merge_env_with(lookup);
        config.validate()?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the file to load. An explicit path that does not exist is an error.
    pub fn locate(&self, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = self.working_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Ok(Some(local));
        }

        Ok(self
            .global_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file()))
    }
}
