use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::clip::Clip;
use crate::config::CatalogSettings;
use crate::error::{Error, Result};

use super::model::{Catalog, Clips, Defaults, Slot, TrackSet};

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_default_dir(path: &Path, settings: &CatalogSettings) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.eq_ignore_ascii_case(settings.default_dir_name.trim()))
        .unwrap_or(false)
}

/// Decode whichever slot files exist in `dir`. Missing files are skipped
/// silently; files that fail to decode are logged and skipped.
fn load_clips(dir: &Path, settings: &CatalogSettings) -> Clips {
    let mut clips = Clips::default();
    for slot in Slot::ALL {
        let path = dir.join(settings.file_for(slot));
        if !path.is_file() {
            continue;
        }
        match Clip::from_wav(&path) {
            Ok(clip) => {
                debug!("{}: decoded {} ({:.1?})", dir.display(), slot, clip.duration());
                clips.set(slot, Some(clip));
            }
            Err(e) => warn!("{e}; falling back to the default {slot}"),
        }
    }
    clips
}

impl Clips {
    /// Decode the slot files of a single folder, e.g. one holding the
    /// fallback clips. Fails only when `dir` is not a readable directory.
    pub fn load_dir(dir: &Path, settings: &CatalogSettings) -> Result<Self> {
        let meta = std::fs::metadata(dir).map_err(|e| Error::io(dir, e))?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }
        Ok(load_clips(dir, settings))
    }
}

impl Catalog {
    /// Scan `root` for track sets.
    ///
    /// Only the immediate subdirectories are considered. Fails when the root
    /// itself cannot be read; problems with individual sets are logged.
    pub fn load(root: &Path, defaults: Arc<Defaults>, settings: &CatalogSettings) -> Result<Self> {
        let meta = std::fs::metadata(root).map_err(|e| Error::io(root, e))?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(settings.follow_links)
            .min_depth(1)
            .max_depth(1);

        let mut sets: Vec<TrackSet> = Vec::new();
        let mut has_default = false;
        for entry in walker
            .into_iter()
            .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_dir() {
                continue;
            }

            info!("Loading {}...", entry.file_name().to_string_lossy());
            if is_default_dir(path, settings) {
                // `default/` and `Default/` can coexist on case-sensitive
                // filesystems; they still stand for one set.
                if has_default {
                    warn!("ignoring duplicate default folder {}", path.display());
                } else {
                    has_default = true;
                    sets.push(TrackSet::default_set(defaults.clone()));
                }
            } else {
                let clips = load_clips(path, settings);
                sets.push(TrackSet::from_folder(
                    path.to_path_buf(),
                    clips,
                    defaults.clone(),
                ));
            }
        }

        sets.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
        info!("Loaded {} track set(s) from {}", sets.len(), root.display());

        Ok(Self {
            sets,
            defaults,
            marker: settings.marker_file.clone(),
        })
    }
}
