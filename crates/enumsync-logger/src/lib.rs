//! Console and file logging for the enumsync CLI
//!
//! Every message is appended to `~/.config/enumsync/enumsync.log` (truncated
//! on each run). The console only shows what the verbosity allows; user
//! facing output stays on stdout, diagnostics go to stderr.

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

const LOG_FILE_NAME: &str = "enumsync.log";
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

struct LoggerState {
    verbosity: u8,
    log_file: Option<PathBuf>,
    spinner: Option<ProgressBar>,
}

static STATE: Mutex<LoggerState> = Mutex::new(LoggerState {
    verbosity: 0,
    log_file: None,
    spinner: None,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Trace,
    Debug,
    Info,
    Success,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Lowest verbosity at which the level reaches the console
    fn min_verbosity(self) -> u8 {
        match self {
            Level::Trace => 2,
            Level::Debug | Level::Info => 1,
            Level::Success | Level::Warn | Level::Error => 0,
        }
    }

    fn console_prefix(self) -> Option<ColoredString> {
        match self {
            Level::Trace => Some("trace:".dimmed()),
            Level::Debug => Some("debug:".blue().bold()),
            Level::Info => None,
            Level::Success => Some("\u{2714}".green().bold()),
            Level::Warn => Some("warning:".yellow().bold()),
            Level::Error => Some("Error:".red().bold()),
        }
    }
}

/// `tracing` filter directive for a verbosity level
/// 0 = warn, 1 = debug (-v), 2+ = trace (-vv)
pub fn verbosity_to_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Set the console verbosity and start a fresh log file
pub fn init_with_verbosity(verbosity: u8) -> Result<(), String> {
    let log_file = default_log_path()?;
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create log directory: {}", e))?;
    }
    if log_file.exists() {
        let _ = fs::remove_file(&log_file);
    }

    let mut state = STATE.lock().map_err(|_| "Logger state is poisoned".to_string())?;
    state.verbosity = verbosity;
    state.log_file = Some(log_file);
    Ok(())
}

/// Path of the active log file, or where it would be written
pub fn log_path() -> Option<PathBuf> {
    STATE
        .lock()
        .ok()
        .and_then(|state| state.log_file.clone())
        .or_else(|| default_log_path().ok())
}

fn default_log_path() -> Result<PathBuf, String> {
    #[cfg(not(target_os = "windows"))]
    let dir = dirs::home_dir()
        .ok_or("Could not determine home directory")?
        .join(".config")
        .join("enumsync");

    #[cfg(target_os = "windows")]
    let dir = dirs::config_dir()
        .ok_or("Could not determine config directory")?
        .join("enumsync");

    Ok(dir.join(LOG_FILE_NAME))
}

fn emit(level: Level, message: &str) {
    let (log_file, verbosity) = match STATE.lock() {
        Ok(state) => (state.log_file.clone(), state.verbosity),
        Err(_) => (None, 0),
    };

    if let Some(path) = log_file {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{}] {} {}", timestamp, level.tag(), message);
        }
    }

    if verbosity < level.min_verbosity() {
        return;
    }
    match level.console_prefix() {
        Some(prefix) => eprintln!("{} {}", prefix, message),
        None => eprintln!("{}", message),
    }
}

pub fn trace(message: &str) {
    emit(Level::Trace, message);
}

pub fn debug(message: &str) {
    emit(Level::Debug, message);
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn success(message: &str) {
    emit(Level::Success, message);
}

pub fn warn(message: &str) {
    emit(Level::Warn, message);
}

/// Always shown, regardless of verbosity
pub fn error(message: &str) {
    emit(Level::Error, message);
}

/// Show a spinner on stderr; suppressed when verbose output is on
pub fn spinner_start(message: &str) {
    trace(&format!("started: {}", message));
    let Ok(mut state) = STATE.lock() else {
        return;
    };
    if state.verbosity > 0 {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(SPINNER_FRAMES)
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    if let Some(previous) = state.spinner.replace(spinner) {
        previous.finish_and_clear();
    }
}

/// Clear the spinner and report success
pub fn spinner_success(message: &str) {
    spinner_stop();
    success(message);
}

/// Clear the spinner, if any
pub fn spinner_stop() {
    let spinner = STATE.lock().ok().and_then(|mut state| state.spinner.take());
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_filter() {
        assert_eq!(verbosity_to_filter(0), "warn");
        assert_eq!(verbosity_to_filter(1), "debug");
        assert_eq!(verbosity_to_filter(2), "trace");
        assert_eq!(verbosity_to_filter(7), "trace");
    }

    #[test]
    fn test_console_thresholds() {
        assert_eq!(Level::Error.min_verbosity(), 0);
        assert_eq!(Level::Warn.min_verbosity(), 0);
        assert_eq!(Level::Debug.min_verbosity(), 1);
        assert_eq!(Level::Trace.min_verbosity(), 2);
    }

    #[test]
    fn test_log_path_ends_with_file_name() {
        if let Some(path) = log_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }

    #[test]
    fn test_spinner_stop_without_spinner() {
        spinner_stop();
    }
}
