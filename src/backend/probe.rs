use super::BackendError;
use crate::utils::has_music_extension;
use mp3_metadata::read_from_file;
use rodio::{Decoder, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Opens `path` with the decoder, failing for anything that cannot be played.
pub fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, BackendError> {
    let file = File::open(path).map_err(|source| BackendError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| BackendError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Validates `path` and reads its duration, preferring the file headers over
/// the decoder's estimate. Unknown durations come back as zero.
pub fn probe_file(path: &Path) -> Result<Duration, BackendError> {
    let decoder = open_decoder(path)?;

    let duration = header_duration(path)
        .or_else(|| decoder.total_duration())
        .unwrap_or_default();

    log::debug!("Probed {:?}: {}s", path, duration.as_secs());
    Ok(duration)
}

fn header_duration(path: &Path) -> Option<Duration> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match ext.as_deref() {
        Some("mp3") => read_from_file(path).ok().map(|meta| meta.duration),
        Some("wav") => wav_duration(path),
        Some("flac") => flac_duration(path),
        _ if has_music_extension(path) => tag_duration(path),
        _ => None,
    }
}

fn wav_duration(path: &Path) -> Option<Duration> {
    let reader = hound::WavReader::open(path).ok()?;
    let sample_rate = reader.spec().sample_rate;
    if sample_rate == 0 {
        return None;
    }
    seconds_to_duration(reader.duration() as f64 / sample_rate as f64)
}

fn flac_duration(path: &Path) -> Option<Duration> {
    let reader = claxon::FlacReader::open(path).ok()?;
    let info = reader.streaminfo();
    let samples = info.samples?;
    if info.sample_rate == 0 {
        return None;
    }
    seconds_to_duration(samples as f64 / info.sample_rate as f64)
}

fn tag_duration(path: &Path) -> Option<Duration> {
    let meta = audiotags::Tag::new().read_from_path(path).ok()?;
    meta.duration().and_then(seconds_to_duration)
}

/// `None` for negative, NaN or out-of-range header values.
fn seconds_to_duration(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs).ok()
}
