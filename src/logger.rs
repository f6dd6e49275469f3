use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// Entries kept for the in-app debug panel
const MAX_ENTRIES: usize = 500;

/// In-memory log ring shown by the debug log panel
pub static LOG_BUFFER: Lazy<Logger> = Lazy::new(Logger::new);

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Add an already formatted entry, dropping the oldest past capacity
    pub fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file written when logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::config_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("devlauncher").join("devlauncher.log"))
}

/// Install the global `log` backend.
///
/// Records always reach [`LOG_BUFFER`]; with logging enabled they are also
/// appended to the file at [`get_log_file_path`].
pub fn init(config: &LoggingConfig) -> Result<()> {
    let buffer = LOG_BUFFER.clone();

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .level_for("devlauncher", log::LevelFilter::Debug)
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(())
}
