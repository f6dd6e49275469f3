//! Configuration management for the launcher
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_POLL_AMOUNT, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORTS, DEFAULT_PROBE_TIMEOUT_MS,
    DEFAULT_STATUS_PATH, MAX_POLL_AMOUNT, MAX_TIMING_MS,
};
use crate::style::{AccessibilityFlags, ColorSchemePreference};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub discovery: DiscoveryConfig,
    pub polling: PollingConfig,
    pub ui: UiConfig,
    pub accessibility: AccessibilityFlags,
    pub logging: LoggingConfig,
}

/// Host platform the launcher pretends to run on. Decides how the
/// development machine is reached when no base address is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    /// The Android emulator reaches the host loopback through 10.0.2.2
    Android,
}

impl Platform {
    #[must_use]
    pub fn default_base_address(self) -> &'static str {
        match self {
            Platform::Ios => "http://localhost",
            Platform::Android => "http://10.0.2.2",
        }
    }
}

/// Discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub platform: Platform,
    /// Overrides the platform's base address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,
    /// Candidate ports, probed in this order
    pub ports: Vec<u16>,
    /// Liveness endpoint path
    pub status_path: String,
    /// Per-probe timeout in milliseconds
    pub probe_timeout_ms: u64,
}

/// Polling configuration used by the refetch button
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Number of discovery passes per refetch
    pub poll_amount: u32,
    /// Delay after each pass in milliseconds
    pub poll_interval_ms: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// "auto" follows the OS appearance
    pub color_scheme: ColorSchemePreference,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            base_address: None,
            ports: DEFAULT_PORTS.to_vec(),
            status_path: DEFAULT_STATUS_PATH.to_string(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

impl DiscoveryConfig {
    /// The configured base address, or the platform default
    #[must_use]
    pub fn resolved_base_address(&self) -> String {
        self.base_address
            .clone()
            .unwrap_or_else(|| self.platform.default_base_address().to_string())
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_amount: DEFAULT_POLL_AMOUNT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorSchemePreference::Auto,
            mouse_enabled: false,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("devlauncher.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("devlauncher").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.validate_discovery()?;

        if self.polling.poll_amount == 0 || self.polling.poll_amount > MAX_POLL_AMOUNT {
            anyhow::bail!(
                "poll_amount must be between 1 and {}, got {}",
                MAX_POLL_AMOUNT,
                self.polling.poll_amount
            );
        }

        if self.polling.poll_interval_ms > MAX_TIMING_MS {
            anyhow::bail!("poll_interval_ms cannot exceed {}", MAX_TIMING_MS);
        }

        Ok(())
    }

    /// Validate discovery settings
    fn validate_discovery(&self) -> Result<()> {
        let discovery = &self.discovery;

        if discovery.ports.is_empty() {
            anyhow::bail!("discovery.ports cannot be empty");
        }

        let mut seen = HashSet::new();
        for port in &discovery.ports {
            if *port == 0 {
                anyhow::bail!("discovery.ports cannot contain port 0");
            }
            if !seen.insert(*port) {
                anyhow::bail!("discovery.ports contains duplicate port {}", port);
            }
        }

        if discovery.probe_timeout_ms == 0 || discovery.probe_timeout_ms > MAX_TIMING_MS {
            anyhow::bail!(
                "probe_timeout_ms must be between 1 and {}, got {}",
                MAX_TIMING_MS,
                discovery.probe_timeout_ms
            );
        }

        let base = discovery.resolved_base_address();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            anyhow::bail!("Invalid base_address '{}': expected an http:// or https:// URL", base);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# devlauncher Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("devlauncher"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
