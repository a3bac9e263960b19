use super::probe::{open_decoder, probe_file};
use super::{AudioBackend, BackendError};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::path::Path;
use std::time::Duration;

/// Plays through the default output device on a single sink. Starting a new
/// track clears the sink first, so at most one track is ever queued.
pub struct RodioBackend {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

impl RodioBackend {
    pub fn new() -> Result<Self, BackendError> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;

        Ok(RodioBackend {
            _stream: stream,
            _handle: handle,
            sink,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn probe(&self, path: &Path) -> Result<Duration, BackendError> {
        probe_file(path)
    }

    fn play(&mut self, path: &Path) -> Result<(), BackendError> {
        // The old track is released even if the new one fails to decode.
        self.sink.clear();
        let source = open_decoder(path)?;

        self.sink.append(source);
        self.sink.play();

        log::debug!("Playback started: {:?}", path);
        Ok(())
    }

    fn stop(&mut self) {
        self.sink.clear();
    }
}
