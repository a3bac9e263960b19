//! Ordered song store.
//!
//! Songs live in an arena and are chained through `prev`/`next` indices, so
//! appending and stepping to a neighbour are O(1) while handles stay stable.
//! Entries are never removed; a `SongId` handed out by this playlist stays valid
//! for its whole lifetime.

use crate::song::Song;
use crate::utils::matches_keyword;

/// Stable handle to a song inside a [`Playlist`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SongId(usize);

#[derive(Debug)]
struct Entry {
    song: Song,
    prev: Option<SongId>,
    next: Option<SongId>,
}

#[derive(Debug, Default)]
pub struct Playlist {
    entries: Vec<Entry>,
    head: Option<SongId>,
    tail: Option<SongId>,
}

#[allow(dead_code)]
impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a song at the tail and links it to the previous tail.
    pub fn push_back(&mut self, song: Song) -> SongId {
        let id = SongId(self.entries.len());
        self.entries.push(Entry {
            song,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old_tail) => self.entries[old_tail.0].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        id
    }

    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.entries.get(id.0).map(|entry| &entry.song)
    }

    pub fn head(&self) -> Option<SongId> {
        self.head
    }

    pub fn tail(&self) -> Option<SongId> {
        self.tail
    }

    pub fn next_of(&self, id: SongId) -> Option<SongId> {
        self.entries.get(id.0).and_then(|entry| entry.next)
    }

    pub fn prev_of(&self, id: SongId) -> Option<SongId> {
        self.entries.get(id.0).and_then(|entry| entry.prev)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walks the chain from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            cursor: self.head,
        }
    }

    /// Handles of every song in list order.
    pub fn ids(&self) -> Vec<SongId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// First song, head to tail, whose name contains `keyword` ignoring case.
    pub fn search(&self, keyword: &str) -> Option<SongId> {
        self.iter()
            .find(|(_, song)| matches_keyword(&song.name, keyword))
            .map(|(id, _)| id)
    }
}

pub struct Iter<'a> {
    playlist: &'a Playlist,
    cursor: Option<SongId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (SongId, &'a Song);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = self.playlist.entries.get(id.0)?;
        self.cursor = entry.next;
        Some((id, &entry.song))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn song(name: &str) -> Song {
        Song::new(
            name.to_string(),
            PathBuf::from(format!("/music/{name}.mp3")),
            Duration::from_secs(60),
        )
    }

    fn playlist_of(names: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        for name in names {
            playlist.push_back(song(name));
        }
        playlist
    }

    #[test]
    fn empty_playlist_has_no_ends() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.head(), None);
        assert_eq!(playlist.tail(), None);
        assert_eq!(playlist.iter().count(), 0);
        assert_eq!(playlist.search("anything"), None);
    }

    #[test]
    fn iter_follows_insertion_order() {
        let playlist = playlist_of(&["One", "Two", "Three"]);
        let names: Vec<&str> = playlist.iter().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn links_are_doubly_consistent() {
        let playlist = playlist_of(&["One", "Two", "Three", "Four"]);
        let head = playlist.head().expect("head");
        let tail = playlist.tail().expect("tail");
        assert_eq!(playlist.prev_of(head), None);
        assert_eq!(playlist.next_of(tail), None);

        for id in playlist.ids() {
            if let Some(next) = playlist.next_of(id) {
                assert_eq!(playlist.prev_of(next), Some(id));
            }
        }
    }

    #[test]
    fn push_back_moves_tail_only() {
        let mut playlist = playlist_of(&["One"]);
        let head = playlist.head();
        let added = playlist.push_back(song("Two"));
        assert_eq!(playlist.head(), head);
        assert_eq!(playlist.tail(), Some(added));
        assert_eq!(playlist.get(added).map(|s| s.name.as_str()), Some("Two"));
    }

    #[test]
    fn search_is_case_insensitive_and_returns_first_match() {
        let playlist = playlist_of(&["Morning Sun", "Evening Rain", "Evening Star"]);
        let found = playlist.search("evening").expect("should match");
        assert_eq!(playlist.get(found).map(|s| s.name.as_str()), Some("Evening Rain"));
        assert_eq!(playlist.search("midnight"), None);
    }
}
