//! Plays one round of a picked track set through the default output device.

use log::info;
use rodio::{OutputStreamBuilder, Sink};

use trackset::{Slot, TrackSet};

/// Queue intro, the loop `loops` times, then outro, and block until done.
pub fn play_round(set: &TrackSet, loops: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = OutputStreamBuilder::open_default_stream()?;
    // rodio logs to stderr when OutputStream is dropped.
    stream.log_on_drop(false);

    let sink = Sink::connect_new(stream.mixer());
    for slot in Slot::ALL {
        let Some(clip) = set.clip(slot) else {
            continue;
        };
        let repeats = if slot == Slot::Loop { loops } else { 1 };
        info!("Queueing {slot} ({:.1?}) x{repeats}", clip.duration());
        for _ in 0..repeats {
            sink.append(clip.to_source());
        }
    }

    sink.sleep_until_end();
    Ok(())
}
