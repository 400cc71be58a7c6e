use std::env;
use std::path::{Path, PathBuf};

use crate::catalog::Slot;

use super::schema::Settings;

const ENV_PREFIX: &str = "TRACKSET";
const CONFIG_PATH_VAR: &str = "TRACKSET_CONFIG_PATH";

impl Settings {
    /// Load settings from `TRACKSET__*` variables layered over the config file
    /// found by [`resolve_config_path`].
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `TRACKSET__*` variables layered over `file`.
    ///
    /// A missing file is not an error; the struct defaults fill any gap.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject file names that would make slots or the marker ambiguous.
    pub fn validate(&self) -> Result<(), String> {
        let c = &self.catalog;

        let named = Slot::ALL
            .iter()
            .map(|slot| (format!("catalog.{slot}_file"), c.file_for(*slot)))
            .chain([
                ("catalog.marker_file".to_string(), c.marker_file.as_str()),
                ("catalog.default_dir_name".to_string(), c.default_dir_name.as_str()),
            ])
            .collect::<Vec<_>>();

        if let Some((key, _)) = named.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(format!("{key} must not be empty"));
        }

        // Slot files and the marker share one folder, so they must differ.
        let files = &named[..4];
        for (i, (a, va)) in files.iter().enumerate() {
            if let Some((b, _)) = files[i + 1..].iter().find(|(_, vb)| va.eq_ignore_ascii_case(vb)) {
                return Err(format!("{a} and {b} must differ"));
            }
        }
        Ok(())
    }
}

/// `TRACKSET_CONFIG_PATH` when set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/trackset/config.toml`, falling back to
/// `~/.config/trackset/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("trackset").join("config.toml"))
}
