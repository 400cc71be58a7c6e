//! First-run setup of the music root.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::config::CatalogSettings;
use crate::error::{Error, Result};

pub const INSTRUCTIONS_FILE: &str = "instructions.txt";

/// Text written to `instructions.txt`, filled in from the configured names.
pub fn instructions_text(settings: &CatalogSettings) -> String {
    format!(
        "\
How to add your own music
=========================

1. Create a new folder next to this file. Name it anything you like; the
   song title works well.
2. Put WAV files for your music in that folder. Each one is optional:
   - \"{intro}\" plays once when a round starts.
   - \"{loop_file}\" plays for the rest of the round.
   - \"{outro}\" plays after the round ends.

Extra:
- With several folders here, one enabled folder is picked at random for
  every round.
- A folder named \"{default}\" adds the built-in music to the selection.
  Files inside it are ignored.
- Any file you leave out falls back to the built-in track for that part.
  If you want silence, supply a silent WAV file yourself.
- To take a folder out of the selection, create a file named
  \"{marker}\" inside it. Delete the file to put the folder back.

Good to know:
- New folders are only picked up after a restart.
- Adding or removing \"{marker}\" takes effect on the next round, no restart
  needed.

Only want to replace the main music? Use the same file as both
\"{intro}\" and \"{loop_file}\" and leave out \"{outro}\".
",
        intro = settings.intro_file,
        loop_file = settings.loop_file,
        outro = settings.outro_file,
        default = settings.default_dir_name,
        marker = settings.marker_file,
    )
}

/// Make sure `root` exists, creating it (and its parents) when `create` is set.
///
/// Returns whether the directory had to be created.
pub fn prepare_root(root: &Path, create: bool) -> Result<bool> {
    if root.is_dir() {
        return Ok(false);
    }
    if !create {
        return Err(match fs::metadata(root) {
            Ok(_) => Error::NotADirectory(root.to_path_buf()),
            Err(e) => Error::io(root, e),
        });
    }

    fs::create_dir_all(root).map_err(|e| Error::io(root, e))?;
    info!("Created music root {}", root.display());
    Ok(true)
}

/// Write the instructions file into `root` unless one is already there.
///
/// Returns whether a new file was written.
pub fn ensure_instructions(root: &Path, settings: &CatalogSettings) -> Result<bool> {
    let path = root.join(INSTRUCTIONS_FILE);
    if path.exists() {
        return Ok(false);
    }

    fs::write(&path, instructions_text(settings)).map_err(|e| Error::io(&path, e))?;
    warn!(
        "Looks like this is your first run (or the instructions were deleted). \
         Read {} to learn how to add music.",
        path.display()
    );
    Ok(true)
}
