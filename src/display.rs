//! Terminal geometry and inline-image output.
//!
//! ## Geometry
//!
//! Terminal size is resolved like a POSIX shell would: the `COLUMNS` and
//! `LINES` environment variables win when they hold positive integers, then
//! the size reported by the terminal itself, then a fixed 80x20 fallback.
//! Only stdout counts as "the terminal": when it is redirected the fallback
//! applies even if a controlling tty exists.
//!
//! ## Inline images
//!
//! Images are emitted with the iTerm2 `OSC 1337` file protocol, understood by
//! iTerm2, WezTerm, Konsole and others:
//!
//! ```text
//! ESC ] 1337;File=inline=1;size=<bytes>;height=<lines> : <base64 payload> BEL
//! ```
//!
//! Inside tmux the sequence is wrapped in a DCS passthrough
//! (`ESC P tmux; ... ESC \`) so it reaches the outer terminal. A newline
//! follows every image.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, IsTerminal, Stdout, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to write inline image to the terminal: {0}")]
    Io(#[from] io::Error),
}

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub lines: u16,
}

/// Used when the size cannot be determined (e.g. output is piped).
pub const FALLBACK_SIZE: TerminalSize = TerminalSize {
    columns: 80,
    lines: 20,
};

/// Current terminal size, honoring `COLUMNS` / `LINES` overrides.
pub fn terminal_size() -> TerminalSize {
    let columns = std::env::var("COLUMNS").ok();
    let lines = std::env::var("LINES").ok();
    // crossterm asks /dev/tty first, which answers even when stdout is a file.
    resolve_size(
        columns.as_deref(),
        lines.as_deref(),
        io::stdout().is_terminal(),
        || crossterm::terminal::size().ok(),
    )
}

/// Combine environment overrides with a queried size. `query` is only called
/// when stdout is a terminal and at least one dimension is not overridden.
fn resolve_size(
    env_columns: Option<&str>,
    env_lines: Option<&str>,
    stdout_is_terminal: bool,
    query: impl FnOnce() -> Option<(u16, u16)>,
) -> TerminalSize {
    let parse = |value: Option<&str>| {
        value
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|&n| n > 0)
    };
    let (columns, lines) = (parse(env_columns), parse(env_lines));
    if let (Some(columns), Some(lines)) = (columns, lines) {
        return TerminalSize { columns, lines };
    }

    let queried = if stdout_is_terminal { query() } else { None };
    let (queried_columns, queried_lines) = queried.unwrap_or((0, 0));
    let pick = |value: u16, fallback: u16| if value > 0 { value } else { fallback };
    TerminalSize {
        columns: columns.unwrap_or(pick(queried_columns, FALLBACK_SIZE.columns)),
        lines: lines.unwrap_or(pick(queried_lines, FALLBACK_SIZE.lines)),
    }
}

/// Something that can show an encoded image inline.
pub trait InlineImageDisplay {
    /// Show `payload` (an encoded image file) `height_lines` terminal lines
    /// tall. A height of 0 lets the terminal pick.
    fn show(&mut self, payload: &[u8], height_lines: u32) -> Result<(), DisplayError>;
}

/// iTerm2 inline-image protocol writer.
pub struct Iterm2Display<W: Write> {
    out: W,
    tmux: bool,
}

impl<W: Write> Iterm2Display<W> {
    pub fn new(out: W, tmux: bool) -> Self {
        Self { out, tmux }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Iterm2Display<Stdout> {
    /// Write to stdout, wrapping for tmux when running inside it.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), std::env::var_os("TMUX").is_some())
    }
}

impl<W: Write> InlineImageDisplay for Iterm2Display<W> {
    fn show(&mut self, payload: &[u8], height_lines: u32) -> Result<(), DisplayError> {
        let sequence = iterm2_sequence(payload, height_lines, self.tmux);
        self.out.write_all(&sequence)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Build the complete escape sequence for one image, trailing newline included.
pub fn iterm2_sequence(payload: &[u8], height_lines: u32, tmux: bool) -> Vec<u8> {
    let mut args = vec!["inline=1".to_string(), format!("size={}", payload.len())];
    if height_lines > 0 {
        args.push(format!("height={height_lines}"));
    }

    let mut sequence = Vec::with_capacity(payload.len() * 4 / 3 + 64);
    if tmux {
        sequence.extend_from_slice(b"\x1bPtmux;\x1b");
    }
    sequence.extend_from_slice(format!("\x1b]1337;File={}:", args.join(";")).as_bytes());
    sequence.extend_from_slice(STANDARD.encode(payload).as_bytes());
    sequence.push(0x07);
    if tmux {
        sequence.extend_from_slice(b"\x1b\\");
    }
    sequence.push(b'\n');
    sequence
}
