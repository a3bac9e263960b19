use crate::utils::format_duration;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub name: String,
    pub path: PathBuf,
    pub duration: Duration,
}

impl Song {
    pub fn new(name: String, path: PathBuf, duration: Duration) -> Self {
        Song {
            name,
            path,
            // Only whole seconds are shown or compared.
            duration: Duration::from_secs(duration.as_secs()),
        }
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_truncates_to_whole_seconds() {
        let song = Song::new(
            "A".to_string(),
            PathBuf::from("a.mp3"),
            Duration::from_millis(180_750),
        );
        assert_eq!(song.duration, Duration::from_secs(180));
        assert_eq!(song.formatted_duration(), "3:00");
    }
}
