//! Decoded, in-memory audio clips.
//!
//! A `Clip` is decoded once when the catalog is built and then shared by
//! every round that picks its track set, so cloning only bumps a refcount.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::warn;
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, Source};

use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Clip {
    path: Option<PathBuf>,
    channels: u16,
    sample_rate: u32,
    samples: Arc<[f32]>,
}

impl Clip {
    /// Build a clip from interleaved samples.
    pub fn new(channels: u16, sample_rate: u32, samples: impl Into<Arc<[f32]>>) -> Self {
        Self {
            path: None,
            channels: channels.max(1),
            sample_rate: sample_rate.max(1),
            samples: samples.into(),
        }
    }

    /// A mono clip of silence lasting `duration`.
    pub fn silence(duration: Duration) -> Self {
        const RATE: u32 = 44_100;
        let len = (duration.as_secs_f64() * RATE as f64).round() as usize;
        Self::new(1, RATE, vec![0.0f32; len])
    }

    /// Decode a WAV file fully into memory.
    pub fn from_wav(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let decoder = Decoder::new(BufReader::new(file)).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let expected = decoder.total_duration();
        let samples: Vec<f32> = decoder.collect();

        if let Some(missing) = missing_samples(expected, channels, sample_rate, samples.len()) {
            warn!(
                "{} ended {missing} samples short of its header; it may be truncated",
                path.display()
            );
        }

        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::new(channels, sample_rate, samples)
        })
    }

    /// File the clip was decoded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn duration(&self) -> Duration {
        let frames = self.samples.len() as f64 / self.channels as f64;
        Duration::from_secs_f64(frames / self.sample_rate as f64)
    }

    /// Fresh playable source over the clip's samples.
    pub fn to_source(&self) -> SamplesBuffer {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.to_vec())
    }

    /// Whether both handles point at the same decoded samples.
    pub fn same_as(&self, other: &Clip) -> bool {
        Arc::ptr_eq(&self.samples, &other.samples)
    }
}

/// How many samples short of the header's length a decode came up, if any.
/// Differences under one frame are rounding.
fn missing_samples(
    expected: Option<Duration>,
    channels: u16,
    sample_rate: u32,
    decoded: usize,
) -> Option<usize> {
    let expected = expected?;
    let channels = channels.max(1) as usize;
    let frames = (expected.as_secs_f64() * sample_rate as f64).round() as usize;
    let want = frames * channels;
    (want >= decoded + channels).then(|| want - decoded)
}

// Samples are omitted; a clip can hold minutes of audio.
impl std::fmt::Debug for Clip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clip")
            .field("path", &self.path)
            .field("channels", &self.channels)
            .field("sample_rate", &self.sample_rate)
            .field("duration", &self.duration())
            .finish()
    }
}
