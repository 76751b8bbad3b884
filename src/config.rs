use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `LEADWIZARD_TUI__TICK_RATE_MS=100`.
const ENV_PREFIX: &str = "LEADWIZARD_";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub wizard: WizardConfig,
    pub data: DataConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
}

/// Wizard session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Wizard definition (JSON, TOML or YAML). The built-in lead intake
    /// wizard is used when unset.
    pub definition_path: Option<PathBuf>,
    /// Quiet window before an auto-save fires.
    pub autosave_debounce_ms: u64,
    /// Interval between elapsed-time ticks.
    pub elapsed_tick_ms: u64,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            definition_path: None,
            autosave_debounce_ms: 2000,
            elapsed_tick_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/leadwizard/config.toml`, then
    /// `LEADWIZARD_*` environment variables.
    /// Returns `Default` if the sources cannot be merged.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            log::info!("Loading config from {}", config_path.display());
        } else {
            log::debug!(
                "No config file at {}, using defaults and environment",
                config_path.display()
            );
        }

        match Self::figment(config_path).extract() {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {e}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("leadwizard"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Where auto-saved drafts live.
    pub fn drafts_dir(&self) -> PathBuf {
        self.data_dir().join("drafts")
    }

    /// Where submitted leads are written.
    pub fn leads_dir(&self) -> PathBuf {
        self.data_dir().join("leads")
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("leadwizard").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
