mod app;
mod backend;
mod config;
mod history;
mod input_handler;
mod persistence;
mod playlist;
mod song;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use backend::{AudioBackend, RodioBackend, SilentBackend};
use clap::Parser;
use config::{Args, Config};
use std::io;

fn open_backend(config: &Config) -> Box<dyn AudioBackend> {
    if config.silent {
        log::info!("Silent mode: songs are validated but not played");
        return Box::new(SilentBackend::new());
    }

    match RodioBackend::new() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            log::warn!("{e}; continuing without audio output");
            Box::new(SilentBackend::new())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(Config::log_level(args.verbose)),
    )
    .init();

    let config = Config::from(&args);
    let mut app = App::new(open_backend(&config), config);

    if app.config.load_on_start {
        match app.load_playlist() {
            Ok(report) => {
                log::info!(
                    "Loaded {} song(s) from {}, skipped {}",
                    report.loaded,
                    app.config.playlist_file.display(),
                    report.skipped
                );
                if report.skipped > 0 {
                    eprintln!(
                        "{} saved song(s) could not be opened and were skipped.",
                        report.skipped
                    );
                }
            }
            Err(e) => {
                log::warn!("{e:#}; starting with an empty playlist");
                eprintln!("Could not load saved playlist: {e:#}");
            }
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    input_handler::run(&mut app, &mut input, &mut out)
}
