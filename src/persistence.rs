//! Flat-file playlist storage.
//!
//! One record per line, `name,path`, split on the first comma. There is no
//! escaping, so a comma inside a name does not survive a round trip. Durations
//! are not stored; they are probed again when the playlist is loaded.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_PLAYLIST_FILE: &str = "playlist.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistRecord {
    pub name: String,
    pub path: PathBuf,
}

/// Overwrites `file_path` with `records`, one line each, in order.
pub fn save<'a, I>(file_path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a Path)>,
{
    let file = File::create(file_path)
        .with_context(|| format!("Failed to create playlist file {}", file_path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for (name, path) in records {
        writeln!(writer, "{},{}", name, path.display())?;
        count += 1;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write playlist file {}", file_path.display()))?;

    log::info!("Saved {} song(s) to {}", count, file_path.display());
    Ok(())
}

/// Reads every well-formed record from `file_path`. A missing file is an
/// empty playlist.
pub fn load(file_path: &Path) -> Result<Vec<PlaylistRecord>> {
    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No playlist file at {}", file_path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to open playlist file {}", file_path.display())
            })
        }
    };

    let mut reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read playlist file {}", file_path.display()))?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            log::warn!(
                "Skipping line {} of {}: not valid UTF-8",
                line_number,
                file_path.display()
            );
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(record) => records.push(record),
            None => log::warn!(
                "Skipping line {} of {}: expected `name,path`",
                line_number,
                file_path.display()
            ),
        }
    }

    Ok(records)
}

/// Splits a `name,path` line on its first comma. Lines without a comma or
/// with an empty path are rejected.
pub fn parse_line(line: &str) -> Option<PlaylistRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (name, path) = line.split_once(',')?;
    if path.is_empty() {
        return None;
    }

    Some(PlaylistRecord {
        name: name.to_string(),
        path: PathBuf::from(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_line_splits_on_first_comma() {
        let record = parse_line("Song, Part 2,/music/a.mp3").expect("line should parse");
        assert_eq!(record.name, "Song");
        assert_eq!(record.path, PathBuf::from(" Part 2,/music/a.mp3"));
    }

    #[test]
    fn parse_line_rejects_missing_separator_or_path() {
        assert_eq!(parse_line("no separator here"), None);
        assert_eq!(parse_line("name only,"), None);
    }

    #[test]
    fn parse_line_strips_carriage_return() {
        let record = parse_line("A,/music/a.mp3\r").expect("line should parse");
        assert_eq!(record.path, PathBuf::from("/music/a.mp3"));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let records = load(&dir.path().join("playlist.txt")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_skips_blank_and_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("playlist.txt");
        fs::write(&file, "A,/music/a.mp3\n\nbadline\nB,/music/b.mp3\n").unwrap();

        let records = load(&file).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn load_skips_lines_that_are_not_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("playlist.txt");
        fs::write(&file, b"A,/music/a.mp3\nCaf\xe9,/music/x.mp3\nB,/music/b.mp3").unwrap();

        let records = load(&file).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(records[1].path, PathBuf::from("/music/b.mp3"));
    }

    #[test]
    fn save_overwrites_and_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("playlist.txt");
        fs::write(&file, "Old,/old.mp3\nOlder,/older.mp3\n").unwrap();

        let a = PathBuf::from("/music/a.mp3");
        let b = PathBuf::from("/music/b.mp3");
        save(&file, vec![("A", a.as_path()), ("B", b.as_path())]).unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "A,/music/a.mp3\nB,/music/b.mp3\n"
        );
        let records = load(&file).unwrap();
        assert_eq!(
            records,
            vec![
                PlaylistRecord { name: "A".to_string(), path: a },
                PlaylistRecord { name: "B".to_string(), path: b },
            ]
        );
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("nope").join("playlist.txt");
        assert!(save(&file, Vec::<(&str, &Path)>::new()).is_err());
    }
}
