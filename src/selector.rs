//! Random track set selection.
//!
//! Every pick re-checks which sets are enabled, then draws one of them
//! uniformly. Picks are independent; nothing is remembered between rounds.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::catalog::{Catalog, TrackSet};


/// Sets of `catalog` that may be picked right now.
pub fn eligible(catalog: &Catalog) -> Vec<&TrackSet> {
    catalog.iter().filter(|set| catalog.is_enabled(set)).collect()
}

/// Pick one enabled set uniformly at random, or `None` when none is enabled.
pub fn pick<'c, R: rand::Rng + ?Sized>(catalog: &'c Catalog, rng: &mut R) -> Option<&'c TrackSet> {
    let options = eligible(catalog);
    let Some(selected) = options.choose(rng).copied() else {
        info!("No track sets are available; leaving the music alone.");
        return None;
    };

    debug!("{} of {} track set(s) eligible", options.len(), catalog.len());
    info!("Selected track set: {}", selected.name());
    Some(selected)
}

/// Owns the random source used for picks.
pub struct Selector<R = StdRng> {
    rng: R,
}

impl Selector<StdRng> {
    /// Selector seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Selector producing a reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Default for Selector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> Selector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick<'c>(&mut self, catalog: &'c Catalog) -> Option<&'c TrackSet> {
        pick(catalog, &mut self.rng)
    }

    /// `count` independent picks, one per round. Rounds with nothing
    /// eligible are dropped.
    pub fn pick_many<'c>(&mut self, catalog: &'c Catalog, count: usize) -> Vec<&'c TrackSet> {
        (0..count).filter_map(|_| self.pick(catalog)).collect()
    }
}
