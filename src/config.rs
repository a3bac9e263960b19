use crate::persistence::DEFAULT_PLAYLIST_FILE;
use crate::utils::expand_home;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cli-playlist", version)]
#[command(about = "Console playlist manager with shuffle, repeat and history", long_about = None)]
pub struct Args {
    /// Playlist file read at startup and written on exit
    #[arg(short = 'f', long, default_value = DEFAULT_PLAYLIST_FILE)]
    pub playlist_file: String,

    /// Never open an audio device; songs are validated but not played
    #[arg(long)]
    pub silent: bool,

    /// Start with an empty playlist instead of loading the playlist file
    #[arg(long)]
    pub no_load: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub playlist_file: PathBuf,
    pub silent: bool,
    pub load_on_start: bool,
}

impl Config {
    pub fn log_level(verbose: bool) -> &'static str {
        if verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            playlist_file: PathBuf::from(DEFAULT_PLAYLIST_FILE),
            silent: false,
            load_on_start: true,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            playlist_file: expand_home(&args.playlist_file),
            silent: args.silent,
            load_on_start: !args.no_load,
        }
    }
}
