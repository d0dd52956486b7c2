use super::Config;
use crate::error::ConfigError;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load `~/.postcraft/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        Self::load_or_init_at(home.join(".postcraft").join("config.toml"))
    }

    /// Same as [`load_or_init`](Self::load_or_init) for an explicit path.
    pub fn load_or_init_at(config_path: PathBuf) -> Result<Self, ConfigError> {
        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut config = Self {
            config_path,
            ..Self::default()
        };
        config.save()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read an existing file; a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        config.config_path = path.to_path_buf();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Load(format!("failed to serialize config: {e}")))?;
        fs::write(&self.config_path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let backend = &self.backend;

        let url = url::Url::parse(&backend.api_url).map_err(|e| {
            ConfigError::Validation(format!("backend.api_url `{}`: {e}", backend.api_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "backend.api_url must be http(s), got `{}`",
                url.scheme()
            )));
        }

        if !(0.0..=1.0).contains(&backend.temperature) {
            return Err(ConfigError::Validation(format!(
                "backend.temperature must be within 0.0..=1.0, got {}",
                backend.temperature
            )));
        }
        if backend.max_tokens == 0 {
            return Err(ConfigError::Validation(
                "backend.max_tokens must be greater than zero".into(),
            ));
        }
        if backend.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.render.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "render.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
