//! Checker configuration loading
//!
//! Loads `migration-check.toml` from the working directory, or the file
//! named by `MIGRATION_CHECK_CONFIG`. A missing file means defaults: every
//! rule enabled and warnings reported without affecting the exit code.

use std::path::{Path, PathBuf};

use migration_rules::{GlobalRule, PerClassRule};
use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Rule names to skip. Per-class and global names are both accepted.
    #[serde(default)]
    pub disabled_rules: Vec<String>,

    /// Treat warning verdicts as failures when computing the exit code
    #[serde(default)]
    pub warnings_as_failures: bool,
}

impl CheckerConfig {
    /// Environment variable for config path override
    pub const ENV_CONFIG_PATH: &'static str = "MIGRATION_CHECK_CONFIG";

    /// Default config filename
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "migration-check.toml";

    /// Load configuration from file
    ///
    /// Resolution order:
    /// 1. `MIGRATION_CHECK_CONFIG` environment variable
    /// 2. `./migration-check.toml`
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let path = Self::resolve_config_path();

        if !path.exists() {
            tracing::info!(
                path = %path.display(),
                "Migration check config not found, using defaults"
            );
            return Ok(Self::default());
        }

        let cfg = Self::load_from_path(&path)?;
        tracing::info!(
            path = %path.display(),
            disabled = ?cfg.disabled_rules,
            warnings_as_failures = cfg.warnings_as_failures,
            "Loaded migration check config"
        );
        Ok(cfg)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CheckerError::config_with_source(
                format!("failed to read config at {}", path.display()),
                e,
            )
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from TOML string
    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(contents)
            .map_err(|e| CheckerError::config_with_source("failed to parse config", e))?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn resolve_config_path() -> PathBuf {
        std::env::var(Self::ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_CONFIG_FILENAME))
    }

    /// Every disabled name must refer to a registered rule.
    pub fn validate(&self) -> Result<()> {
        for name in &self.disabled_rules {
            let known = name.parse::<PerClassRule>().is_ok() || name.parse::<GlobalRule>().is_ok();
            if !known {
                return Err(CheckerError::config(format!(
                    "disabled_rules names unknown rule `{name}`"
                )));
            }
        }

        if self.per_class_rules().is_empty() && self.global_rules().is_empty() {
            tracing::warn!("All migration rules are disabled; every check will pass");
        }

        Ok(())
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled_rules.iter().any(|disabled| disabled == name)
    }

    /// Enabled per-class rules in registry order
    pub fn per_class_rules(&self) -> Vec<PerClassRule> {
        PerClassRule::all()
            .into_iter()
            .filter(|rule| self.is_enabled(rule.as_str()))
            .collect()
    }

    /// Enabled global rules in registry order
    pub fn global_rules(&self) -> Vec<GlobalRule> {
        GlobalRule::all()
            .into_iter()
            .filter(|rule| self.is_enabled(rule.as_str()))
            .collect()
    }
}
