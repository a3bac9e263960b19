//! Backend without an output device.
//!
//! Files are validated and measured exactly like the rodio backend does, but
//! nothing is played. Used with `--silent` and when no audio device opens.

use super::probe::{open_decoder, probe_file};
use super::{AudioBackend, BackendError};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct SilentBackend {
    loaded: Option<PathBuf>,
}

impl SilentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The file the last successful `play` would be playing.
    #[allow(dead_code)]
    pub fn loaded(&self) -> Option<&Path> {
        self.loaded.as_deref()
    }
}

impl AudioBackend for SilentBackend {
    fn probe(&self, path: &Path) -> Result<Duration, BackendError> {
        probe_file(path)
    }

    fn play(&mut self, path: &Path) -> Result<(), BackendError> {
        self.loaded = None;
        open_decoder(path)?;
        log::debug!("Silent playback of {:?}", path);
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.loaded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_silent_wav(path: &Path) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..8000 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn play_replaces_loaded_track_and_stop_clears_it() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.wav");
        let second = dir.path().join("second.wav");
        write_silent_wav(&first);
        write_silent_wav(&second);

        let mut backend = SilentBackend::new();
        backend.play(&first).unwrap();
        assert_eq!(backend.loaded(), Some(first.as_path()));

        backend.play(&second).unwrap();
        assert_eq!(backend.loaded(), Some(second.as_path()));

        backend.stop();
        assert_eq!(backend.loaded(), None);
    }

    #[test]
    fn failed_play_releases_previous_track() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.wav");
        write_silent_wav(&good);

        let mut backend = SilentBackend::new();
        backend.play(&good).unwrap();
        assert!(backend.play(&dir.path().join("gone.wav")).is_err());
        assert_eq!(backend.loaded(), None);
    }
}
