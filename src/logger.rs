//! Logging setup.
//!
//! Records from the `log` macros go through a fern dispatch into a
//! [`LogBuffer`] shown in the debug panel and, when enabled, into a log file.
//! Nothing is written to stdout while the terminal UI is running.

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Add a formatted line, dropping the oldest one when full
    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Get all lines, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(lines) = self.lines.lock() {
            lines.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all lines
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_BUFFER_CAPACITY)
    }
}

/// Format a record the way every sink shows it
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {:<5} {}] {}", Local::now().format("%H:%M:%S%.3f"), level, target, message)
}

/// Default log file location in the user's data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the fern dispatch for `config`, feeding `buffer`.
///
/// Returns the dispatch together with the log file path when file logging is
/// enabled. The caller decides whether to install it globally.
pub fn build_dispatch(config: &LoggingConfig, buffer: LogBuffer) -> Result<(fern::Dispatch, Option<PathBuf>)> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new().level(level).chain(fern::Output::call(move |record| {
        buffer.push(format_line(record.level(), record.target(), record.args()));
    }));

    let mut log_path = None;
    if config.enabled {
        let path = match &config.file {
            Some(path) => path.clone(),
            None => get_log_file_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let file_sink = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", format_line(record.level(), record.target(), message)))
            })
            .chain(file);
        dispatch = dispatch.chain(file_sink);
        log_path = Some(path);
    }

    Ok((dispatch, log_path))
}

/// Install the global logger. Returns the buffer the debug panel reads.
pub fn init(config: &LoggingConfig) -> Result<LogBuffer> {
    let buffer = LogBuffer::default();
    let (dispatch, log_path) = build_dispatch(config, buffer.clone())?;
    dispatch.apply().context("Failed to install logger")?;

    if let Some(path) = log_path {
        log::info!("Logging to {}", path.display());
    }
    Ok(buffer)
}
