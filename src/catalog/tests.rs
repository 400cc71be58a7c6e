use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tempfile::tempdir;

use super::*;
use crate::clip::Clip;
use crate::clip::tests::write_wav;
use crate::config::CatalogSettings;
use crate::error::Error;

fn defaults() -> Arc<Defaults> {
    Arc::new(Defaults {
        intro: Some(Clip::silence(Duration::from_millis(5))),
        loop_clip: Some(Clip::silence(Duration::from_millis(10))),
        outro: Some(Clip::silence(Duration::from_millis(15))),
    })
}

fn make_set(root: &Path, name: &str, wavs: &[&str], disabled: bool) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    for wav in wavs {
        write_wav(&dir.join(wav), 400);
    }
    if disabled {
        fs::write(dir.join("disable.txt"), b"").unwrap();
    }
}

#[test]
fn load_finds_sets_and_default_folder() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &["intro.wav", "loop.wav"], false);
    make_set(root.path(), "B", &["loop.wav"], true);
    make_set(root.path(), "Default", &[], false);
    fs::write(root.path().join("instructions.txt"), b"read me").unwrap();

    let catalog = Catalog::load(root.path(), defaults(), &CatalogSettings::default()).unwrap();

    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A", "B", DEFAULT_SET_NAME]);

    let a = catalog.get("a").unwrap();
    assert!(a.has_own(Slot::Intro));
    assert!(a.has_own(Slot::Loop));
    assert!(!a.has_own(Slot::Outro));
    assert!(!a.is_default());

    assert!(catalog.get(DEFAULT_SET_NAME).unwrap().is_default());
}

#[test]
fn default_folder_contents_are_ignored() {
    let root = tempdir().unwrap();
    make_set(root.path(), "default", &["loop.wav"], false);

    let defaults = defaults();
    let catalog = Catalog::load(root.path(), defaults.clone(), &CatalogSettings::default()).unwrap();

    let set = &catalog.sets()[0];
    assert!(set.is_default());
    assert!(!set.has_own(Slot::Loop));
    assert!(set.loop_clip().unwrap().same_as(defaults.loop_clip.as_ref().unwrap()));
}

#[test]
fn missing_loop_falls_back_to_default_loop() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &["intro.wav"], false);

    let defaults = defaults();
    let catalog = Catalog::load(root.path(), defaults.clone(), &CatalogSettings::default()).unwrap();
    let a = catalog.get("A").unwrap();

    let own_intro = a.intro().unwrap();
    assert!(!own_intro.same_as(defaults.intro.as_ref().unwrap()));
    assert!(own_intro.path().is_some());

    let loop_clip = a.loop_clip().expect("default loop is exposed");
    assert!(loop_clip.same_as(defaults.loop_clip.as_ref().unwrap()));
    assert!(a.outro().unwrap().same_as(defaults.outro.as_ref().unwrap()));
}

#[test]
fn missing_slot_without_default_is_absent() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &[], false);

    let catalog =
        Catalog::load(root.path(), Arc::new(Defaults::default()), &CatalogSettings::default()).unwrap();
    assert!(catalog.get("A").unwrap().loop_clip().is_none());
}

#[test]
fn corrupt_wav_is_treated_as_absent() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &["intro.wav"], false);
    fs::write(root.path().join("A").join("loop.wav"), b"definitely not riff").unwrap();

    let catalog = Catalog::load(root.path(), defaults(), &CatalogSettings::default()).unwrap();
    let a = catalog.get("A").unwrap();
    assert!(a.has_own(Slot::Intro));
    assert!(!a.has_own(Slot::Loop));
}

#[test]
fn load_fails_for_missing_root() {
    let root = tempdir().unwrap();
    let missing = root.path().join("nope");

    let err = Catalog::load(&missing, defaults(), &CatalogSettings::default()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn load_fails_for_file_root() {
    let root = tempdir().unwrap();
    let file = root.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    let err = Catalog::load(&file, defaults(), &CatalogSettings::default()).unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)));
}

#[test]
fn load_does_not_recurse_and_keeps_dot_folders() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &[], false);
    make_set(&root.path().join("A"), "Nested", &[], false);
    make_set(root.path(), ".Synth", &["loop.wav"], false);

    let catalog = Catalog::load(root.path(), defaults(), &CatalogSettings::default()).unwrap();
    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec![".Synth", "A"]);
    assert!(catalog.get(".synth").unwrap().has_own(Slot::Loop));

    let settings = CatalogSettings {
        include_hidden: false,
        ..CatalogSettings::default()
    };
    let catalog = Catalog::load(root.path(), defaults(), &settings).unwrap();
    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn custom_file_names_are_respected() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &["main.wav"], false);
    fs::write(root.path().join("A").join("off"), b"").unwrap();

    let settings = CatalogSettings {
        loop_file: "main.wav".to_string(),
        marker_file: "off".to_string(),
        ..CatalogSettings::default()
    };
    let catalog = Catalog::load(root.path(), defaults(), &settings).unwrap();
    let a = catalog.get("A").unwrap();
    assert!(a.has_own(Slot::Loop));
    assert_eq!(catalog.marker(), "off");
    assert!(!catalog.is_enabled(a));
}

#[test]
fn enabled_tracks_marker_and_folder_existence() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &[], false);

    let catalog = Catalog::load(root.path(), defaults(), &CatalogSettings::default()).unwrap();
    let a = catalog.get("A").unwrap();
    assert!(catalog.is_enabled(a));

    let marker = root.path().join("A").join("disable.txt");
    fs::write(&marker, b"").unwrap();
    assert!(!catalog.is_enabled(a));

    fs::remove_file(&marker).unwrap();
    assert!(catalog.is_enabled(a));

    fs::remove_dir_all(root.path().join("A")).unwrap();
    assert!(!catalog.is_enabled(a));
}

#[test]
fn default_set_is_always_enabled() {
    let set = TrackSet::default_set(defaults());
    assert!(set.is_enabled("disable.txt"));
    assert_eq!(set.container(), None);
}

#[test]
fn differently_cased_default_folders_yield_one_set() {
    let root = tempdir().unwrap();
    make_set(root.path(), "default", &[], false);
    make_set(root.path(), "Default", &[], false);
    make_set(root.path(), "A", &[], false);

    let catalog = Catalog::load(root.path(), defaults(), &CatalogSettings::default()).unwrap();
    let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A", DEFAULT_SET_NAME]);
}

#[cfg(unix)]
#[test]
fn non_utf8_folder_names_stay_distinct() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let a = TrackSet::from_folder(
        Path::new("/music").join(OsStr::from_bytes(b"Caf\xe9")),
        Clips::default(),
        defaults(),
    );
    let b = TrackSet::from_folder(
        Path::new("/music").join(OsStr::from_bytes(b"Na\xefve")),
        Clips::default(),
        defaults(),
    );
    assert_eq!(a.name(), "Caf\u{FFFD}");
    assert_eq!(b.name(), "Na\u{FFFD}ve");
    assert_ne!(a.name(), b.name());
}

#[cfg(unix)]
#[test]
fn marker_check_error_excludes_only_that_set() {
    let root = tempdir().unwrap();
    make_set(root.path(), "A", &[], false);
    make_set(root.path(), "B", &[], false);

    // A marker that is a symlink to itself makes `try_exists` fail.
    let marker = root.path().join("A").join("disable.txt");
    std::os::unix::fs::symlink(&marker, &marker).unwrap();
    assert!(marker.try_exists().is_err());

    let catalog = Catalog::load(root.path(), defaults(), &CatalogSettings::default()).unwrap();
    let names: Vec<&str> = crate::selector::eligible(&catalog)
        .into_iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(names, vec!["B"]);
}
