//! pullfeed - an infinite-scroll feed with pull-to-refresh for the terminal
//!
//! The library holds the feed state machine and its background fetching,
//! independent of any UI. The bundled terminal app renders it with Ratatui,
//! next to a scrollable tab bar and two text fields.
//!
//! # Modules
//!
//! * [`feed`] - Loaded sequence, load-more/refresh controller, viewport and pull gesture
//! * [`source`] - Data source trait, fetch errors and the mock source
//! * [`tabs`] - Scrollable tab strip model
//! * [`text_field`] - Editable text field model
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Feed state machine and controller
pub mod feed;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Page sources for the feed
pub mod source;

/// Scrollable tab strip
pub mod tabs;

/// Editable text field
pub mod text_field;

/// Terminal user interface components and rendering
pub mod ui;

pub use feed::{FeedController, FeedSettings, FeedSnapshot, FeedUpdate};
pub use source::{DataSource, FetchError, Item, MockDataSource};
