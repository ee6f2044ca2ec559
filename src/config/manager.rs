use super::{evolution::EvolutionConfig, output::OutputConfig, traits::ConfigSection};
use crate::error::HellogenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), HellogenError> {
        self.evolution.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), HellogenError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HellogenError::Configuration(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        self.load_from_str(&contents)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(())
    }

    pub fn load_from_str(&mut self, contents: &str) -> Result<(), HellogenError> {
        let config: AppConfig = toml::from_str(contents)
            .map_err(|e| HellogenError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), HellogenError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| HellogenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| HellogenError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Applies `f` and keeps the result only if it validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), HellogenError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.clone();
        f(&mut config);
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
