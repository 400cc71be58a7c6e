use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::Slot;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackset/config.toml` or `~/.config/trackset/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKSET__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub selection: SelectionSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Music root. Overridden by `--root`; `./Music` when neither is set.
    pub root: Option<PathBuf>,
    /// Create the music root when it does not exist.
    pub create_root: bool,
    /// Write `instructions.txt` into the root if it is missing.
    pub write_instructions: bool,
    /// Folder holding the fallback clips, laid out like a track set.
    pub defaults_dir: Option<PathBuf>,

    pub intro_file: String,
    pub loop_file: String,
    pub outro_file: String,
    /// A set whose folder contains this file is skipped by the selector.
    pub marker_file: String,
    /// Folder name (case-insensitive) standing in for the default music.
    pub default_dir_name: String,

    /// Whether to follow symlinked set folders.
    pub follow_links: bool,
    /// Whether dot-prefixed folders count as sets. Set to `false` to skip
    /// tool folders such as `.git`.
    pub include_hidden: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            root: None,
            create_root: true,
            write_instructions: true,
            defaults_dir: None,
            intro_file: "intro.wav".to_string(),
            loop_file: "loop.wav".to_string(),
            outro_file: "outro.wav".to_string(),
            marker_file: "disable.txt".to_string(),
            default_dir_name: "default".to_string(),
            follow_links: true,
            include_hidden: true,
        }
    }
}

impl CatalogSettings {
    /// File name a set folder uses for `slot`.
    pub fn file_for(&self, slot: Slot) -> &str {
        match slot {
            Slot::Intro => &self.intro_file,
            Slot::Loop => &self.loop_file,
            Slot::Outro => &self.outro_file,
        }
    }

    pub fn root_or_default(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("Music"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Fixed RNG seed for reproducible picks. Unset = seeded from the OS.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Base log level; `RUST_LOG` and `-v` take precedence.
    pub level: LogLevel,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    #[serde(alias = "none")]
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
