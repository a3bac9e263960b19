//! Audio backend seam.
//!
//! The playlist never decodes audio itself: it asks a backend to probe a file
//! (validate it and read its duration) and to start playing it. Two backends
//! ship with the player, one that drives the default output device through
//! `rodio` and a silent one that only probes.

pub mod probe;
pub mod rodio_backend;
pub mod silent;

pub use rodio_backend::RodioBackend;
pub use silent::SilentBackend;

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or corrupt audio file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("cannot start playback: {0}")]
    Sink(#[from] rodio::PlayError),
}

pub trait AudioBackend {
    /// Opens `path` to check that it is playable and returns its duration.
    fn probe(&self, path: &Path) -> Result<Duration, BackendError>;

    /// Stops whatever this backend was playing, then starts `path`. On error
    /// nothing is left playing.
    fn play(&mut self, path: &Path) -> Result<(), BackendError>;

    fn stop(&mut self);
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn probe(&self, path: &Path) -> Result<Duration, BackendError> {
        (**self).probe(path)
    }

    fn play(&mut self, path: &Path) -> Result<(), BackendError> {
        (**self).play(path)
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}
