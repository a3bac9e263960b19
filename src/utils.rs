use dirs;
use std::path::PathBuf;
use std::time::Duration;

pub const MUSIC_FORMATS: [&str; 6] = ["mp3", "wav", "flac", "ogg", "m4a", "aac"];

/// Formats a duration as `minutes:seconds`, e.g. `3:00` or `12:07`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Case-insensitive substring match of `keyword` against `name`.
pub fn matches_keyword(name: &str, keyword: &str) -> bool {
    name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Returns true when the file extension is one of the formats the probe knows by name.
pub fn has_music_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MUSIC_FORMATS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(Duration::from_secs(180)), "3:00");
        assert_eq!(format_duration(Duration::from_secs(90)), "1:30");
        assert_eq!(format_duration(Duration::from_secs(7)), "0:07");
        assert_eq!(format_duration(Duration::from_secs(727)), "12:07");
    }

    #[test]
    fn format_duration_drops_fractional_seconds() {
        assert_eq!(format_duration(Duration::from_millis(61_900)), "1:01");
    }

    #[test]
    fn matches_keyword_ignores_case() {
        assert!(matches_keyword("Evening Rain", "evening"));
        assert!(matches_keyword("Evening Rain", "RAIN"));
        assert!(matches_keyword("Evening Rain", "ng ra"));
        assert!(!matches_keyword("Evening Rain", "morning"));
    }

    #[test]
    fn expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home("/music/a.mp3"), PathBuf::from("/music/a.mp3"));
        assert_eq!(expand_home("  rel/a.mp3 "), PathBuf::from("rel/a.mp3"));
    }

    #[test]
    fn expand_home_replaces_tilde_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/a.mp3"), home.join("a.mp3"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn has_music_extension_is_case_insensitive() {
        assert!(has_music_extension(Path::new("song.MP3")));
        assert!(has_music_extension(Path::new("/x/song.flac")));
        assert!(!has_music_extension(Path::new("notes.txt")));
        assert!(!has_music_extension(Path::new("noext")));
    }
}
