use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::clip::Clip;

/// Name reported for the set standing in for the host's built-in music.
pub const DEFAULT_SET_NAME: &str = "Default Music";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Plays once when a round starts.
    Intro,
    /// Plays for the duration of the round.
    Loop,
    /// Plays after the round ends.
    Outro,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Intro, Slot::Loop, Slot::Outro];

    pub fn label(self) -> &'static str {
        match self {
            Slot::Intro => "intro",
            Slot::Loop => "loop",
            Slot::Outro => "outro",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One optional clip per slot.
#[derive(Debug, Clone, Default)]
pub struct Clips {
    pub intro: Option<Clip>,
    pub loop_clip: Option<Clip>,
    pub outro: Option<Clip>,
}

impl Clips {
    pub fn get(&self, slot: Slot) -> Option<&Clip> {
        match slot {
            Slot::Intro => self.intro.as_ref(),
            Slot::Loop => self.loop_clip.as_ref(),
            Slot::Outro => self.outro.as_ref(),
        }
    }

    pub fn set(&mut self, slot: Slot, clip: Option<Clip>) {
        match slot {
            Slot::Intro => self.intro = clip,
            Slot::Loop => self.loop_clip = clip,
            Slot::Outro => self.outro = clip,
        }
    }
}

/// Fallback clips used for any slot a track set does not supply.
///
/// Built once by the caller (usually from the host's own music) and shared
/// by the catalog and every set in it.
pub type Defaults = Clips;

#[derive(Clone)]
pub struct TrackSet {
    name: String,
    container: Option<PathBuf>,
    own: Clips,
    defaults: Arc<Defaults>,
}

impl TrackSet {
    /// Set backed by a user folder.
    pub fn from_folder(container: PathBuf, own: Clips, defaults: Arc<Defaults>) -> Self {
        let name = container
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| container.display().to_string());
        Self {
            name,
            container: Some(container),
            own,
            defaults,
        }
    }

    /// The always-enabled set that plays only the defaults.
    pub fn default_set(defaults: Arc<Defaults>) -> Self {
        Self {
            name: DEFAULT_SET_NAME.to_string(),
            container: None,
            own: Clips::default(),
            defaults,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder the set was read from; `None` for the default set.
    pub fn container(&self) -> Option<&Path> {
        self.container.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.container.is_none()
    }

    /// The set's own clip for `slot`, or the default clip when it has none.
    pub fn clip(&self, slot: Slot) -> Option<&Clip> {
        self.own.get(slot).or_else(|| self.defaults.get(slot))
    }

    pub fn intro(&self) -> Option<&Clip> {
        self.clip(Slot::Intro)
    }

    pub fn loop_clip(&self) -> Option<&Clip> {
        self.clip(Slot::Loop)
    }

    pub fn outro(&self) -> Option<&Clip> {
        self.clip(Slot::Outro)
    }

    /// Whether the folder supplied its own clip for `slot`.
    pub fn has_own(&self, slot: Slot) -> bool {
        self.own.get(slot).is_some()
    }

    /// Checked against the filesystem on every call, so the marker file can
    /// be toggled without reloading. Any I/O error counts as disabled.
    pub fn is_enabled(&self, marker: &str) -> bool {
        let Some(dir) = &self.container else {
            return true;
        };

        let dir_ok = std::fs::metadata(dir).map(|m| m.is_dir()).unwrap_or(false);
        if !dir_ok {
            return false;
        }

        matches!(dir.join(marker).try_exists(), Ok(false))
    }
}

impl fmt::Debug for TrackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackSet")
            .field("name", &self.name)
            .field("container", &self.container)
            .field("intro", &self.has_own(Slot::Intro))
            .field("loop", &self.has_own(Slot::Loop))
            .field("outro", &self.has_own(Slot::Outro))
            .finish()
    }
}

/// All track sets found under a music root.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(super) sets: Vec<TrackSet>,
    pub(super) defaults: Arc<Defaults>,
    pub(super) marker: String,
}

impl Catalog {
    /// Build a catalog from sets assembled by the caller.
    pub fn from_sets(sets: Vec<TrackSet>, defaults: Arc<Defaults>, marker: impl Into<String>) -> Self {
        Self {
            sets,
            defaults,
            marker: marker.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackSet> {
        self.sets.iter()
    }

    pub fn sets(&self) -> &[TrackSet] {
        &self.sets
    }

    /// Look a set up by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&TrackSet> {
        self.sets.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Name of the file whose presence disables a set.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_enabled(&self, set: &TrackSet) -> bool {
        set.is_enabled(&self.marker)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TrackSet;
    type IntoIter = std::slice::Iter<'a, TrackSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
