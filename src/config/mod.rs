// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod core;
pub mod loader;
pub mod validation;

pub use self::core::{AppConfig, DefaultsConfig, ObservabilityConfig, LOG_LEVELS};

pub use self::loader::{ConfigFormat, ConfigLoader};

pub use self::validation::ConfigValidator;

use anyhow::Result;

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults
    ///
    /// Supports the following environment variables:
    /// - NESSUS_INTERPRETER: Default interpreter (Gemini, Cohere, WhiterabbitNeo)
    /// - NESSUS_SCAN_TYPE: Default scan type
    /// - LOG_LEVEL: Logging level
    pub fn from_env() -> Result<Self> {
        let mut config = AppConfig::default();

        loader::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        ConfigValidator::validate_app_config(&config)?;

        Ok(config)
    }
}
