//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, HighScoreEntry, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Phase, EMPTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Block colours indexed by cell tag (0 is empty).
pub const PALETTE: [Option<Rgb>; 8] = [
    None,
    Some(Rgb::new(0x00, 0xf0, 0xf0)), // I
    Some(Rgb::new(0x00, 0x00, 0xf0)), // J
    Some(Rgb::new(0xf0, 0xa0, 0x00)), // L
    Some(Rgb::new(0xf0, 0xf0, 0x00)), // O
    Some(Rgb::new(0x00, 0xf0, 0x00)), // S
    Some(Rgb::new(0xa0, 0x00, 0xf0)), // T
    Some(Rgb::new(0xf0, 0x00, 0x00)), // Z
];

/// Colour for a board cell tag, `None` for empty or unknown tags
pub fn piece_color(tag: Cell) -> Option<Rgb> {
    PALETTE.get(tag as usize).copied().flatten()
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';

/// Side length of the next-piece preview, in cells.
const PREVIEW_CELLS: u16 = 4;

/// Minimum panel width before the side panel is drawn.
const MIN_PANEL_W: u16 = 12;

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed in the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// `high_scores` is shown on the start and game-over screens. Callers can
    /// reuse the framebuffer across frames; it is resized to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = snap.board.width() as u16;
        let rows = snap.board.height() as u16;
        let w = cols * self.cell_w + 2;
        let h = rows * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), PLAY_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, w - 2, h - 2, ' ', bg);
        self.draw_border(fb, frame, CellStyle::plain(Rgb::new(200, 200, 200), BLACK));

        // Locked cells with the current piece on top.
        for y in 0..rows {
            for x in 0..cols {
                match snap.visible_cell(x as i32, y as i32) {
                    EMPTY => self.draw_empty_cell(fb, frame, x, y),
                    tag => self.draw_block(fb, frame, x, y, tag),
                }
            }
        }

        self.draw_side_panel(fb, snap, high_scores, viewport, frame);

        match snap.phase {
            Phase::NotStarted => self.draw_overlay(fb, frame, &["PRESS ENTER", "TO START"]),
            Phase::Paused => self.draw_overlay(fb, frame, &["PAUSED", "P TO RESUME"]),
            Phase::Over => {
                let score = format!("SCORE {}", snap.score);
                self.draw_overlay(fb, frame, &["GAME OVER", score.as_str(), "R TO RESTART"]);
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, high_scores, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell(fb, frame.x + 1, frame.y + 1, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, tag: Cell) {
        if let Some(style) = block_style(tag) {
            self.fill_cell(fb, frame.x + 1, frame.y + 1, x, y, BLOCK, style);
        }
    }

    /// Fill one board cell whose grid origin is at (`origin_x`, `origin_y`).
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + cell_x * self.cell_w;
        let py = origin_y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "PLAYER", label);
        fb.put_str(panel_x, y.saturating_add(1), &snap.player_name, value);
        y = y.saturating_add(3);

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next);
        y = y.saturating_add(PREVIEW_CELLS * self.cell_h + 1);

        if matches!(snap.phase, Phase::NotStarted | Phase::Over) {
            self.draw_high_scores(fb, panel_x, y, high_scores, viewport);
        }
    }

    /// Next piece inside a 4x4 box, nudged to the centre
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &Piece) {
        let bg = CellStyle::plain(BLACK, BLACK);
        fb.fill_rect(
            x,
            y,
            PREVIEW_CELLS * self.cell_w,
            PREVIEW_CELLS * self.cell_h,
            ' ',
            bg,
        );

        let Some(style) = block_style(next.color) else {
            return;
        };
        let off_x = PREVIEW_CELLS.saturating_sub(next.shape.width() as u16) / 2;
        let off_y = PREVIEW_CELLS.saturating_sub(next.shape.height() as u16) / 2;
        for (col, row) in next.shape.blocks() {
            let (col, row) = (col as u16 + off_x, row as u16 + off_y);
            if col < PREVIEW_CELLS && row < PREVIEW_CELLS {
                self.fill_cell(fb, x, y, col, row, BLOCK, style.bold());
            }
        }
    }

    fn draw_high_scores(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        mut y: u16,
        high_scores: &[HighScoreEntry],
        viewport: Viewport,
    ) {
        let title = CellStyle::plain(Rgb::new(0xf0, 0xf0, 0x00), BLACK).bold();
        let row = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);

        fb.put_str(x, y, "HIGH SCORES", title);
        y = y.saturating_add(1);
        if high_scores.is_empty() {
            fb.put_str(x, y, "NO SCORES YET", row.dim());
            return;
        }
        for (rank, entry) in high_scores.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let style = if rank == 0 { row.bold() } else { row };
            let line = format!("{:>2}. {:<10} {}", rank + 1, entry.player_name, entry.score);
            fb.put_str(x, y, &line, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();
        let top = frame
            .y
            .saturating_add(frame.h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }
}

fn block_style(tag: Cell) -> Option<CellStyle> {
    piece_color(tag).map(|fg| CellStyle::plain(fg, PLAY_BG).bold())
}
