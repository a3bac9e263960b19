use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

pub const MENU: &str = "1. Add Song
2. Display Playlist
3. Search Song
4. Next
5. Previous
6. Toggle Shuffle
7. Toggle Repeat One
8. Toggle Repeat All
9. Recently Played
10. Exit
11. Play Song
";

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    queue!(
        out,
        Print("\n"),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Cyan),
        Print(title),
        ResetColor,
        SetAttribute(Attribute::Reset),
        Print("\n")
    )
}

pub fn draw_menu<W: Write>(out: &mut W) -> io::Result<()> {
    heading(out, "===== MUSIC PLAYER =====")?;
    queue!(out, Print(MENU), Print("Choice: "))?;
    out.flush()
}

pub fn draw_playlist<W: Write>(out: &mut W, entries: &[(String, String)]) -> io::Result<()> {
    heading(out, "--- PLAYLIST ---")?;
    if entries.is_empty() {
        queue!(out, Print("(empty)\n"))?;
    }
    for (name, duration) in entries {
        queue!(out, Print(format!("{name} ({duration})\n")))?;
    }
    out.flush()
}

pub fn draw_history<'a, W, I>(out: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    heading(out, "--- Recently Played ---")?;
    for name in names {
        queue!(out, Print(name), Print("\n"))?;
    }
    out.flush()
}

pub fn draw_now_playing<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    queue!(
        out,
        Print("Now Playing: "),
        SetForegroundColor(Color::Yellow),
        Print(name),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

pub fn draw_toggle<W: Write>(out: &mut W, label: &str, on: bool) -> io::Result<()> {
    let (state, color) = if on {
        ("ON", Color::Green)
    } else {
        ("OFF", Color::DarkGrey)
    };
    queue!(
        out,
        Print(format!("{label}: ")),
        SetForegroundColor(color),
        Print(state),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

pub fn draw_message<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")?;
    out.flush()
}

pub fn draw_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Red),
        Print(message),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

pub fn prompt<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    write!(out, "{label}")?;
    out.flush()
}
