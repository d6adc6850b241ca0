//! GameView: maps a `BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Board `y` grows upward while terminal rows
//! grow downward, so board row 0 is drawn on the bottom line of the frame.
//! Rows in the spawn slack above the field are not drawn.

use crate::core::{BoardSnapshot, Point};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const SETTLED_FG: Rgb = Rgb::new(170, 170, 180);

const CONTROLS: [(&str, &str); 6] = [
    ("←/h", "left"),
    ("→/l", "right"),
    ("↓/j", "down"),
    ("↑/k", "rotate"),
    ("r", "restart"),
    ("q", "quit"),
];

/// Top-left corner of the board frame and its size, in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    cols: i32,
    rows: i32,
}

/// Board renderer with a configurable cell aspect.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let cols = snap.width.max(0) as u16;
        let rows = snap.height.max(0) as u16;
        let w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_mul(self.cell_h).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
            cols: snap.width,
            rows: snap.height,
        };

        self.draw_border(fb, frame);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for row in 0..snap.height {
            for col in 0..snap.width {
                self.fill_board_cell(fb, frame, Point::new(col, row), '·', empty);
            }
        }

        let settled = CellStyle::new(SETTLED_FG, PLAY_BG);
        for &p in &snap.settled {
            self.fill_board_cell(fb, frame, p, '█', settled);
        }

        if let Some(active) = &snap.active {
            let fg = snap.active_kind.map(piece_color).unwrap_or(SETTLED_FG);
            let style = CellStyle::new(fg, PLAY_BG).bold();
            for &p in active {
                self.fill_board_cell(fb, frame, p, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.topped_out {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let right = f.x + f.w - 1;
        let bottom = f.y + f.h - 1;

        fb.set(f.x, f.y, style.glyph('┌'));
        fb.set(right, f.y, style.glyph('┐'));
        fb.set(f.x, bottom, style.glyph('└'));
        fb.set(right, bottom, style.glyph('┘'));
        for x in f.x + 1..right {
            fb.set(x, f.y, style.glyph('─'));
            fb.set(x, bottom, style.glyph('─'));
        }
        for y in f.y + 1..bottom {
            fb.set(f.x, y, style.glyph('│'));
            fb.set(right, y, style.glyph('│'));
        }
    }

    /// Paint one board cell; cells outside the visible field are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.x >= f.cols || p.y < 0 || p.y >= f.rows {
            return;
        }
        let screen_row = (f.rows - 1 - p.y) as u16;
        let px = f.x + 1 + p.x as u16 * self.cell_w;
        let py = f.y + 1 + screen_row * self.cell_h;
        fb.fill(px, py, self.cell_w, self.cell_h, style.glyph(ch));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = f.y;
        fb.print(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        let letter = snap.active_kind.map_or('-', PieceKind::letter);
        fb.set(panel_x, y, value.glyph(letter));
        y = y.saturating_add(2);

        fb.print(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for (keys, action) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.print(panel_x, y, keys, value);
            fb.print(panel_x.saturating_add(5), y, action, value.dim());
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.print(x, mid_y, text, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::I => Rgb::new(80, 220, 220),
    }
}
