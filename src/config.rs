use crate::error::ConfigError;
use crate::icon::ScaleFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub icons: IconsConfig,
    pub scaling: ScalingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Registry file, relative to `resource_root` (None = built-in sets)
    pub registry: Option<String>,
    /// Directory user icon sets are read from
    pub resource_root: Option<PathBuf>,
    /// Set to activate after loading (None = registry's `active_set`)
    pub active_set: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3
    pub filter: ScaleFilter,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/dirtree-icons/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirtree-icons").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.icons.registry.is_some() && self.icons.resource_root.is_none() {
            return Err(ConfigError::Invalid(
                "icons.registry requires icons.resource_root".into(),
            ));
        }
        if let Some(root) = &self.icons.resource_root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "icons.resource_root must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
