//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is painted as a list of `(x, y, len)` runs. After a resize or
//! `invalidate` the runs cover the whole screen; otherwise only cells that
//! differ from the frame already on screen are sent.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Colors, Print, SetAttribute, SetColors},
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen, if known.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush_buf()?;
        self.shown = None;
        Ok(())
    }

    /// Undo `enter`. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size as a viewport
    pub fn viewport(&self) -> Result<Viewport> {
        let (width, height) = terminal::size()?;
        Ok(Viewport::new(width, height))
    }

    /// Repaint everything on the next draw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents the caller is expected to
    /// overwrite; this avoids cloning a frame per draw.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self
            .shown
            .take()
            .filter(|prev| prev.width() == fb.width() && prev.height() == fb.height());
        encode_frame(prev.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        self.shown = Some(match prev {
            Some(mut prev) => {
                std::mem::swap(&mut prev, fb);
                prev
            }
            None => fb.clone(),
        });
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the escape sequences that turn `prev` into `next` on screen.
///
/// With no previous frame the screen is cleared and every row is painted.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let runs = match prev {
        Some(prev) => changed_runs(prev, next),
        None => {
            queue!(out, terminal::Clear(terminal::ClearType::All))?;
            (0..next.height()).map(|y| (0, y, next.width())).collect()
        }
    };

    let mut pen = Pen::default();
    for (x, y, len) in runs {
        queue!(out, cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            pen.set(out, cell.style)?;
            queue!(out, Print(cell.ch))?;
        }
    }
    if pen.style.is_some() {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Style last sent to the terminal, so repeats are not re-sent
#[derive(Debug, Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
        let prev = self.style.replace(style);
        if prev == Some(style) {
            return Ok(());
        }
        // An attribute reset also drops the colours, so both are re-sent.
        if prev.map_or(true, |p| (p.bold, p.dim) != (style.bold, style.dim)) {
            queue!(out, SetAttribute(Attribute::Reset))?;
            if style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
        }
        queue!(out, SetColors(Colors::new(style.fg.into(), style.bg.into())))
    }
}

/// `(x, y, len)` runs of cells that differ between the two frames.
///
/// A size mismatch marks every row dirty.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| (0, y, w)).collect();
    }

    let differs = |x: u16, y: u16| prev.get(x, y) != next.get(x, y);
    let mut runs = Vec::new();
    for y in 0..h {
        let mut x = 0;
        while x < w {
            if !differs(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}
