use crate::APP_NAME;
use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::SetLoggerError;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

pub const LOG_FILE_NAME: &str = "movedle.log";

#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Install the global logger.
///
/// Records go to the log file so they never draw over the terminal UI; if it
/// can't be opened they go to stderr. `RUST_LOG` overrides the level.
/// Returns the file path when logging to a file.
pub fn init_logging(verbose: bool) -> Result<Option<PathBuf>, SetLoggerError> {
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let log_file = log_file_path().and_then(|path| open_log_file(&path).map(|file| (path, file)));
    let written_to = match log_file {
        Some((path, file)) => {
            builder.target(Target::Pipe(Box::new(file)));
            Some(path)
        }
        None => {
            builder.target(Target::Stderr);
            None
        }
    };

    builder.try_init()?;
    Ok(written_to)
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
