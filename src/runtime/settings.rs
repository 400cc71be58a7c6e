use std::path::Path;

use trackset::config::{self, Settings};

/// Settings from `file` (or the resolved default path), plus the reason they
/// were replaced by defaults, if they were. The reason is returned rather
/// than logged because the logger's level comes from these settings.
pub fn load_settings(file: Option<&Path>) -> (Settings, Option<String>) {
    let loaded = match file {
        Some(path) => Settings::load_from(Some(path)),
        None => Settings::load(),
    };

    match loaded.map_err(|e| format!("failed to load config: {e}")) {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (Settings::default(), Some(format!("invalid config: {msg}"))),
        },
        Err(msg) => (Settings::default(), Some(msg)),
    }
}

/// Configured level raised one step per `-v`.
pub fn log_filter(base: config::LogLevel, verbose: u8) -> log::LevelFilter {
    let mut level = base.to_filter();
    for _ in 0..verbose {
        level = match level {
            log::LevelFilter::Off => log::LevelFilter::Error,
            log::LevelFilter::Error => log::LevelFilter::Warn,
            log::LevelFilter::Warn => log::LevelFilter::Info,
            log::LevelFilter::Info => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
    }
    level
}

pub fn init_logging(level: log::LevelFilter) {
    // RUST_LOG, when set, overrides the configured level.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .try_init();
}
