use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Pick a random folder of intro/loop/outro tracks for each round.
#[derive(Parser, Debug)]
#[command(name = "trackset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (defaults to a single `pick`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Music root holding one folder per track set
    #[arg(long, value_name = "DIR", env = "TRACKSET_ROOT")]
    pub root: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Folder with fallback intro/loop/outro files
    #[arg(long, value_name = "DIR")]
    pub defaults: Option<PathBuf>,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every track set, whether it is enabled, and the slots it supplies
    List,
    /// Pick track sets, one per round
    Pick {
        /// Number of rounds to pick for
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Pick a track set and play intro, loop and outro
    #[cfg(feature = "playback")]
    Play {
        /// How many times to repeat the loop track
        #[arg(short, long, default_value_t = 1)]
        loops: u32,
    },
}
