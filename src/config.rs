//! Configuration management for pullfeed
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_FRESH_START_MAX,
    DEFAULT_LOAD_MORE_DELAY_MS, DEFAULT_MAX_ITEMS, DEFAULT_PAGE_SIZE, DEFAULT_PULL_STEP, DEFAULT_REFRESH_DELAY_MS,
    DEFAULT_REFRESH_THRESHOLD, DEFAULT_TAB_SELECTION, LOCAL_CONFIG_FILE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub refresh: RefreshConfig,
    pub source: SourceConfig,
    pub tabs: TabsConfig,
    pub logging: LoggingConfig,
}

/// Feed paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Items requested per page
    pub page_size: usize,
    /// The feed never holds more than this many items
    pub max_items: usize,
    /// Items the feed is seeded with at startup (1..=initial_items)
    pub initial_items: usize,
    /// Start loading more this many rows before the last item is visible
    pub prefetch_distance: usize,
}

/// Pull-to-refresh configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Pull distance needed to fire a refresh
    pub threshold: f32,
    /// Pull distance added per row dragged
    pub pull_step: f32,
}

/// Mock data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Simulated latency of a load-more fetch in milliseconds
    pub load_more_delay_ms: u64,
    /// Simulated latency of a refresh fetch in milliseconds
    pub refresh_delay_ms: u64,
    /// Fresh pages start at a random item below this value
    pub fresh_start_max: i64,
    /// Fetches taking longer than this fail with a timeout
    pub fetch_timeout_ms: u64,
}

/// Tab bar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Tab titles in display order
    pub titles: Vec<String>,
    /// Tab selected at startup
    pub initial_selection: usize,
    /// Columns added to each title's width
    pub tab_padding: usize,
    /// Columns between tabs
    pub tab_gap: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app debug panel
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
    /// Log file path; defaults to the data directory
    pub file: Option<PathBuf>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_items: DEFAULT_MAX_ITEMS,
            initial_items: DEFAULT_PAGE_SIZE,
            prefetch_distance: 0,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REFRESH_THRESHOLD,
            pull_step: DEFAULT_PULL_STEP,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            load_more_delay_ms: DEFAULT_LOAD_MORE_DELAY_MS,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            fresh_start_max: DEFAULT_FRESH_START_MAX,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        let titles = [
            "Tab 1",
            "Tab 2 - long",
            "Tab 3",
            "Tab 4",
            "Tab 5",
            "Tab 6",
            "Tab 7",
            "Tab 8 - long",
            "Tab 9",
            "Tab 10",
        ];
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            initial_selection: DEFAULT_TAB_SELECTION,
            tab_padding: 4,
            tab_gap: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

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
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.feed.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        if self.feed.max_items == 0 {
            anyhow::bail!("max_items must be at least 1");
        }
        if self.feed.initial_items > self.feed.max_items {
            anyhow::bail!(
                "initial_items ({}) cannot exceed max_items ({})",
                self.feed.initial_items,
                self.feed.max_items
            );
        }

        // NaN fails both comparisons, so test for "not positive"
        if !(self.refresh.threshold > 0.0) {
            anyhow::bail!("refresh threshold must be positive, got {}", self.refresh.threshold);
        }
        if !(self.refresh.pull_step > 0.0) {
            anyhow::bail!("pull_step must be positive, got {}", self.refresh.pull_step);
        }

        if self.source.fetch_timeout_ms == 0 {
            anyhow::bail!("fetch_timeout_ms must be at least 1");
        }
        if self.source.fresh_start_max <= 0 {
            anyhow::bail!("fresh_start_max must be positive, got {}", self.source.fresh_start_max);
        }

        if self.tabs.titles.is_empty() {
            anyhow::bail!("tabs.titles cannot be empty");
        }
        if self.tabs.initial_selection >= self.tabs.titles.len() {
            anyhow::bail!(
                "tabs.initial_selection must be below {}, got {}",
                self.tabs.titles.len(),
                self.tabs.initial_selection
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Items the feed starts with
    pub fn initial_items(&self) -> Vec<crate::source::Item> {
        (1..=self.feed.initial_items as crate::source::Item).collect()
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# pullfeed Configuration File\n# Generated on {}\n\n",
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
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
