//! Menu Handler for the Console Playlist Manager
//!
//! This module reads numbered menu choices line by line and dispatches them to
//! the `App`. Each command runs to completion and prints its result before the
//! next choice is read.
//!
//! Supported Features:
//! - Adding songs (name + path, `~` expanded) and listing the playlist
//! - Searching by name and playing the first match
//! - Next/previous navigation and the shuffle/repeat toggles
//! - Showing the recently played history
//! - Exit, which stops playback and saves the playlist
//!
//! Input and output are generic so the whole loop can be driven from memory.
//! Numbers outside the menu are ignored; anything else re-prompts. End of input
//! behaves like Exit.

use crate::app::{App, PlayerError};
use crate::backend::AudioBackend;
use crate::playlist::SongId;
use crate::ui;
use crate::utils::expand_home;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddSong,
    DisplayPlaylist,
    SearchSong,
    Next,
    Previous,
    ToggleShuffle,
    ToggleRepeatOne,
    ToggleRepeatAll,
    RecentlyPlayed,
    Exit,
    PlaySong,
}

impl MenuChoice {
    pub fn from_number(number: u32) -> Option<MenuChoice> {
        match number {
            1 => Some(MenuChoice::AddSong),
            2 => Some(MenuChoice::DisplayPlaylist),
            3 => Some(MenuChoice::SearchSong),
            4 => Some(MenuChoice::Next),
            5 => Some(MenuChoice::Previous),
            6 => Some(MenuChoice::ToggleShuffle),
            7 => Some(MenuChoice::ToggleRepeatOne),
            8 => Some(MenuChoice::ToggleRepeatAll),
            9 => Some(MenuChoice::RecentlyPlayed),
            10 => Some(MenuChoice::Exit),
            11 => Some(MenuChoice::PlaySong),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParsedInput {
    Choice(MenuChoice),
    OutOfRange(u32),
    NotANumber,
}

pub fn parse_choice(line: &str) -> ParsedInput {
    match line.trim().parse::<u32>() {
        Ok(number) => match MenuChoice::from_number(number) {
            Some(choice) => ParsedInput::Choice(choice),
            None => ParsedInput::OutOfRange(number),
        },
        Err(_) => ParsedInput::NotANumber,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Reads one line without its terminator. `None` at end of input.
/// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    ui::prompt(out, label)?;
    Ok(read_line(input)?)
}

fn report_played<B: AudioBackend, W: Write>(
    app: &App<B>,
    out: &mut W,
    result: Result<SongId, PlayerError>,
) -> io::Result<()> {
    match result {
        Ok(id) => match app.song(id) {
            Some(song) => ui::draw_now_playing(out, &song.name),
            None => Ok(()),
        },
        Err(PlayerError::Backend(e)) => ui::draw_error(out, &format!("Playback failed: {e}")),
        Err(e) => ui::draw_message(out, &e.to_string()),
    }
}

pub fn handle_choice<B, R, W>(
    choice: MenuChoice,
    app: &mut App<B>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow>
where
    B: AudioBackend,
    R: BufRead,
    W: Write,
{
    match choice {
        MenuChoice::AddSong => {
            let Some(name) = ask(input, out, "Enter Song Name: ")? else {
                return exit(app, out);
            };
            let Some(raw_path) = ask(input, out, "Enter Full Path: ")? else {
                return exit(app, out);
            };

            match app.add_song(&name, &expand_home(&raw_path)) {
                Ok(id) => {
                    let duration = app
                        .song(id)
                        .map(|song| song.formatted_duration())
                        .unwrap_or_default();
                    ui::draw_message(out, &format!("Song added successfully! Duration: {duration}"))?;
                }
                Err(e) => ui::draw_error(out, &format!("Invalid audio file! {e}"))?,
            }
        }
        MenuChoice::DisplayPlaylist => ui::draw_playlist(out, &app.display())?,
        MenuChoice::SearchSong => {
            let Some(keyword) = ask(input, out, "Enter search keyword: ")? else {
                return exit(app, out);
            };
            match app.search(&keyword).and_then(|id| app.song(id)) {
                Some(song) => ui::draw_message(
                    out,
                    &format!("Song Found! {} ({})", song.name, song.formatted_duration()),
                )?,
                None => ui::draw_message(out, "Not Found!")?,
            }
        }
        MenuChoice::Next => {
            let result = app.next();
            report_played(app, out, result)?;
        }
        MenuChoice::Previous => {
            let result = app.prev();
            report_played(app, out, result)?;
        }
        MenuChoice::ToggleShuffle => {
            let on = app.toggle_shuffle();
            ui::draw_toggle(out, "Shuffle", on)?;
        }
        MenuChoice::ToggleRepeatOne => {
            let on = app.toggle_repeat_one();
            ui::draw_toggle(out, "Repeat One", on)?;
        }
        MenuChoice::ToggleRepeatAll => {
            let on = app.toggle_repeat_all();
            ui::draw_toggle(out, "Repeat All", on)?;
        }
        MenuChoice::RecentlyPlayed => {
            if app.history.is_empty() {
                ui::draw_message(out, "Nothing played yet.")?;
            } else {
                ui::draw_history(out, app.recently_played())?;
            }
        }
        MenuChoice::PlaySong => {
            let Some(keyword) = ask(input, out, "Enter song name to play: ")? else {
                return exit(app, out);
            };
            let result = app.play_matching(&keyword);
            report_played(app, out, result)?;
        }
        MenuChoice::Exit => return exit(app, out),
    }

    Ok(Flow::Continue)
}

fn exit<B: AudioBackend, W: Write>(app: &mut App<B>, out: &mut W) -> Result<Flow> {
    app.stop();
    app.save_playlist().with_context(|| {
        format!(
            "Could not save playlist to {}",
            app.config.playlist_file.display()
        )
    })?;
    ui::draw_message(out, "Goodbye!")?;
    Ok(Flow::Exit)
}

/// Runs the menu loop until Exit or end of input.
pub fn run<B, R, W>(app: &mut App<B>, input: &mut R, out: &mut W) -> Result<()>
where
    B: AudioBackend,
    R: BufRead,
    W: Write,
{
    loop {
        ui::draw_menu(out)?;
        let Some(line) = read_line(input)? else {
            exit(app, out)?;
            return Ok(());
        };

        match parse_choice(&line) {
            ParsedInput::Choice(choice) => {
                if handle_choice(choice, app, input, out)? == Flow::Exit {
                    return Ok(());
                }
            }
            ParsedInput::OutOfRange(number) => {
                log::debug!("Ignoring menu choice {}", number);
            }
            ParsedInput::NotANumber => ui::draw_message(out, "Please enter a number.")?,
        }
    }
}
