//! Constants used throughout the application
//!
//! This module centralizes default values, file names and UI text.

// Feed defaults
pub const DEFAULT_PAGE_SIZE: usize = 15;
pub const DEFAULT_MAX_ITEMS: usize = 50;

// Pull-to-refresh defaults
pub const DEFAULT_REFRESH_THRESHOLD: f32 = 100.0;
pub const DEFAULT_PULL_STEP: f32 = 25.0;

// Mock source defaults
pub const DEFAULT_LOAD_MORE_DELAY_MS: u64 = 1000;
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 3000;
pub const DEFAULT_FRESH_START_MAX: i64 = 100;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

// Tab bar defaults
pub const DEFAULT_TAB_SELECTION: usize = 8;

// Files
pub const LOCAL_CONFIG_FILE: &str = "pullfeed.toml";
pub const CONFIG_DIR_NAME: &str = "pullfeed";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "pullfeed.log";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_LOADING_MORE: &str = "⏳ Loading more...";
pub const STATUS_REFRESHING: &str = "🔄 Refreshing...";
pub const STATUS_END_OF_FEED: &str = "— end of feed —";
pub const STATUS_HINTS: &str = "r: refresh • Tab: focus • j/k: scroll • drag down: pull • g: logs • q: quit";
pub const PULL_HINT: &str = "↓ Pull to refresh";
pub const PULL_RELEASE_HINT: &str = "↑ Release to refresh";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'g' or 'Esc' to close";

// UI Layout Constants
/// Height of the tab bar row including borders
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of each text field including borders
pub const TEXT_FIELD_HEIGHT: u16 = 5;
/// Width reserved for each edge indicator of the tab bar
pub const TAB_EDGE_WIDTH: u16 = 3;
/// Maximum number of lines kept by the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 500;
