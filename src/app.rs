//! File: app.rs
//!
//! Description:
//! This file defines the `App` struct, the core of the console playlist manager.
//! It owns the playlist, the recently played history and the audio backend,
//! tracks the current song and applies the shuffle/repeat policy when moving
//! to the next or previous song. Saving and loading the playlist file also
//! goes through here so that loaded songs are validated like typed ones.
//!
//! Key Features:
//! - Adds songs after probing them through the backend
//! - Plays a song and records it in the history
//! - Next/previous navigation with shuffle, repeat one and repeat all
//! - Saves and restores the playlist as `name,path` lines
//!
//! Dependencies: rand, thiserror, anyhow, log

use crate::backend::{AudioBackend, BackendError};
use crate::config::Config;
use crate::history::History;
use crate::persistence;
use crate::playlist::{Playlist, SongId};
use crate::song::Song;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("No next song.")]
    NoNextSong,

    #[error("No previous song.")]
    NoPreviousSong,

    #[error("Song not found.")]
    SongNotFound,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

pub struct App<B: AudioBackend> {
    pub playlist: Playlist,
    pub history: History,
    pub current: Option<SongId>, // Navigation anchor for next/previous
    pub shuffle: bool,
    pub repeat_one: bool,
    pub repeat_all: bool,
    pub config: Config,
    backend: B,
    rng: StdRng,
}

#[allow(dead_code)]
impl<B: AudioBackend> App<B> {
    pub fn new(backend: B, config: Config) -> Self {
        App {
            playlist: Playlist::new(),
            history: History::new(),
            current: None,
            shuffle: false,
            repeat_one: false,
            repeat_all: false,
            config,
            backend,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Makes shuffle picks reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Probes `path` and, if the backend accepts it, appends a new song at the
    /// end of the playlist. A rejected file leaves the playlist untouched.
    pub fn add_song(&mut self, name: &str, path: &Path) -> Result<SongId, BackendError> {
        let duration = self.backend.probe(path).inspect_err(|e| {
            log::warn!("Rejected {:?}: {}", path, e);
        })?;

        let song = Song::new(name.to_string(), path.to_path_buf(), duration);
        log::info!("Added {} ({})", song.name, song.formatted_duration());
        Ok(self.playlist.push_back(song))
    }

    /// `(name, m:ss)` for every song, head to tail.
    pub fn display(&self) -> Vec<(String, String)> {
        self.playlist
            .iter()
            .map(|(_, song)| (song.name.clone(), song.formatted_duration()))
            .collect()
    }

    pub fn search(&self, keyword: &str) -> Option<SongId> {
        self.playlist.search(keyword)
    }

    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.playlist.get(id)
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|id| self.playlist.get(id))
    }

    /// Makes `id` the current song, records it and hands it to the backend.
    ///
    /// The current song and history move even when the backend fails to
    /// start playback; the previous track has been stopped by then, and the
    /// failure is logged and returned.
    pub fn play(&mut self, id: SongId) -> Result<SongId, PlayerError> {
        let song = self.playlist.get(id).ok_or(PlayerError::SongNotFound)?;
        let name = song.name.clone();
        let path = song.path.clone();

        self.current = Some(id);
        self.history.record_play(&name);

        if let Err(e) = self.backend.play(&path) {
            log::warn!("Playback of {} failed: {}", name, e);
            return Err(e.into());
        }

        log::info!("Now playing {}", name);
        Ok(id)
    }

    /// Plays the first song whose name contains `keyword`.
    pub fn play_matching(&mut self, keyword: &str) -> Result<SongId, PlayerError> {
        let id = self.search(keyword).ok_or(PlayerError::SongNotFound)?;
        self.play(id)
    }

    /// Priority: repeat one, shuffle, successor, wrap to head on repeat all.
    /// The three flags are independent; any combination may be on.
    pub fn next(&mut self) -> Result<SongId, PlayerError> {
        let target = match (self.repeat_one, self.shuffle, self.repeat_all, self.current) {
            (true, _, _, Some(current)) => Some(current),
            (_, true, _, _) => self.shuffled_pick(),
            (_, false, _, Some(current)) if self.playlist.next_of(current).is_some() => {
                self.playlist.next_of(current)
            }
            (_, false, true, _) => self.playlist.head(),
            _ => None,
        };

        let id = target.ok_or(PlayerError::NoNextSong)?;
        self.play(id)
    }

    /// Steps back one song in list order. Shuffle and repeat do not apply.
    pub fn prev(&mut self) -> Result<SongId, PlayerError> {
        let id = self
            .current
            .and_then(|current| self.playlist.prev_of(current))
            .ok_or(PlayerError::NoPreviousSong)?;
        self.play(id)
    }

    // A fresh permutation on every call; the same song may come up twice in a row.
    fn shuffled_pick(&mut self) -> Option<SongId> {
        let mut ids = self.playlist.ids();
        ids.shuffle(&mut self.rng);
        ids.first().copied()
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn toggle_repeat_one(&mut self) -> bool {
        self.repeat_one = !self.repeat_one;
        self.repeat_one
    }

    pub fn toggle_repeat_all(&mut self) -> bool {
        self.repeat_all = !self.repeat_all;
        self.repeat_all
    }

    pub fn recently_played(&self) -> impl Iterator<Item = &str> {
        self.history.iter()
    }

    pub fn stop(&mut self) {
        self.backend.stop();
    }

    /// Writes the playlist to the configured file, replacing its contents.
    pub fn save_playlist(&self) -> Result<()> {
        persistence::save(
            &self.config.playlist_file,
            self.playlist
                .iter()
                .map(|(_, song)| (song.name.as_str(), song.path.as_path())),
        )
    }

    /// Appends every record of the configured file, probing each one again.
    /// Records the backend rejects are skipped.
    pub fn load_playlist(&mut self) -> Result<LoadReport> {
        let records = persistence::load(&self.config.playlist_file)?;
        let mut report = LoadReport::default();

        for record in records {
            match self.add_song(&record.name, &record.path) {
                Ok(_) => report.loaded += 1,
                Err(e) => {
                    log::warn!("Skipping saved song {}: {}", record.name, e);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}
