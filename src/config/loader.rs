// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::core::AppConfig;
use super::validation::ConfigValidator;

pub struct ConfigLoader {
    config_path: PathBuf,
    format: ConfigFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let path = config_path.as_ref().to_path_buf();
        let format = Self::detect_format(&path)?;

        Ok(Self {
            config_path: path,
            format,
        })
    }

    pub fn with_format<P: AsRef<Path>>(config_path: P, format: ConfigFormat) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            format,
        }
    }

    fn detect_format(path: &Path) -> Result<ConfigFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config file format"))?;

        match extension {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(anyhow::anyhow!("Unsupported config file format: {}", extension)),
        }
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        self.load_config_with(|key| std::env::var(key).ok())
    }

    /// Load, resolving environment overrides through `lookup`.
    pub fn load_config_with<F>(&self, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {:?}", self.config_path))?;

        let mut config: AppConfig = match self.format {
            ConfigFormat::Yaml => serde_yaml::from_str(&content)
                .context("Failed to parse YAML config")?,
            ConfigFormat::Toml => toml::from_str(&content)
                .context("Failed to parse TOML config")?,
            ConfigFormat::Json => serde_json::from_str(&content)
                .context("Failed to parse JSON config")?,
        };

        apply_env_overrides(&mut config, lookup)?;

        ConfigValidator::validate_app_config(&config)?;

        tracing::debug!("Configuration loaded from {:?}", self.config_path);

        Ok(config)
    }
}

/// Override config values from `NESSUS_INTERPRETER`, `NESSUS_SCAN_TYPE` and `LOG_LEVEL`.
pub(crate) fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(interpreter) = lookup("NESSUS_INTERPRETER") {
        config.defaults.interpreter = interpreter.parse()
            .context("Invalid NESSUS_INTERPRETER")?;
    }

    if let Some(scan_type) = lookup("NESSUS_SCAN_TYPE") {
        config.defaults.scan_type = scan_type.parse()
            .context("Invalid NESSUS_SCAN_TYPE")?;
    }

    if let Some(log_level) = lookup("LOG_LEVEL") {
        config.observability.log_level = log_level;
    }

    Ok(())
}
