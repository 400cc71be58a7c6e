//! Folder-based track set selection.
//!
//! A music root holds one folder per track set, each with optional
//! `intro.wav`, `loop.wav` and `outro.wav` files. [`Catalog::load`] decodes
//! them once; a [`Selector`] then picks one enabled set at random for every
//! round. Slots a set leaves out fall back to caller-supplied [`Defaults`].

pub mod catalog;
pub mod clip;
pub mod config;
pub mod error;
pub mod instructions;
pub mod selector;

pub use catalog::{Catalog, Clips, Defaults, Slot, TrackSet};
pub use clip::Clip;
pub use error::{Error, Result};
pub use selector::Selector;
