//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! A frame is queued into a byte buffer and handed to the writer with a single
//! `write_all`, so the terminal never shows half a frame. The first frame and
//! every frame after a size change are full redraws; otherwise only spans of
//! changed glyphs are re-emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Unchanged glyphs a diff span may swallow instead of issuing a new
/// cursor move. A `MoveTo` costs more bytes than reprinting a few cells.
pub const MAX_SPAN_GAP: u16 = 3;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    ///
    /// Undone by [`TerminalRenderer::exit`], or on drop if `exit` never ran.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Make the next draw a full redraw (resize, external scribbles).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then trade it for the previous frame.
    ///
    /// On return `fb` holds stale contents of the right size, ready to be
    /// rendered into again without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                write_frame_diff(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                write_full_frame(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Queue a clear-screen plus every glyph of `fb`, row by row.
pub fn write_full_frame(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut pen = None;
    for y in 0..fb.height() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        for x in 0..fb.width() {
            let glyph = fb.get(x, y).unwrap_or_default();
            queue_glyph(out, &mut pen, glyph.ch, glyph.style)?;
        }
    }
    queue_reset(out)
}

/// Queue only the spans of `next` that differ from `prev`.
///
/// Both buffers must have the same dimensions.
pub fn write_frame_diff(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for (x, y, len) in changed_spans(prev, next, MAX_SPAN_GAP) {
        out.queue(cursor::MoveTo(x, y))?;
        for glyph in (x..x + len).filter_map(|cx| next.get(cx, y)) {
            queue_glyph(out, &mut pen, glyph.ch, glyph.style)?;
        }
    }
    queue_reset(out)
}

fn queue_glyph(
    out: &mut Vec<u8>,
    pen: &mut Option<CellStyle>,
    ch: char,
    style: CellStyle,
) -> Result<()> {
    if *pen != Some(style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        *pen = Some(style);
    }
    out.queue(Print(ch))?;
    Ok(())
}

fn queue_reset(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` spans covering every changed glyph.
///
/// Spans on the same row separated by at most `max_gap` unchanged glyphs
/// are joined.
fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer, max_gap: u16) -> Vec<(u16, u16, u16)> {
    let mut spans: Vec<(u16, u16, u16)> = Vec::new();
    for y in 0..next.height() {
        let mut open: Option<(u16, u16)> = None; // (start, end exclusive)
        for x in 0..next.width() {
            if prev.get(x, y) == next.get(x, y) {
                continue;
            }
            open = match open {
                Some((start, end)) if x - end <= max_gap => Some((start, x + 1)),
                Some((start, end)) => {
                    spans.push((start, y, end - start));
                    Some((x, x + 1))
                }
                None => Some((x, x + 1)),
            };
        }
        if let Some((start, end)) = open {
            spans.push((start, y, end - start));
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(fb: &mut FrameBuffer, xs: &[u16], y: u16) {
        for &x in xs {
            fb.set(x, y, CellStyle::default().glyph('X'));
        }
    }

    #[test]
    fn adjacent_changes_form_one_span() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        mark(&mut b, &[1, 2, 3], 0);
        assert_eq!(changed_spans(&a, &b, 0), vec![(1, 0, 3)]);
    }

    #[test]
    fn small_gaps_are_swallowed() {
        let a = FrameBuffer::new(12, 1);
        let mut b = FrameBuffer::new(12, 1);
        mark(&mut b, &[0, 3, 10], 0);
        // 0 and 3 are two cells apart; 3 and 10 are six apart.
        assert_eq!(changed_spans(&a, &b, 3), vec![(0, 0, 4), (10, 0, 1)]);
        assert_eq!(changed_spans(&a, &b, 0).len(), 3);
    }

    #[test]
    fn spans_never_cross_rows() {
        let a = FrameBuffer::new(3, 2);
        let mut b = FrameBuffer::new(3, 2);
        mark(&mut b, &[2], 0);
        mark(&mut b, &[0], 1);
        assert_eq!(changed_spans(&a, &b, 3), vec![(2, 0, 1), (0, 1, 1)]);
    }

    #[test]
    fn identical_frames_queue_no_glyphs() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        write_frame_diff(&a, &a.clone(), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '), "unexpected glyph output: {:?}", text);
    }

    #[test]
    fn full_frame_contains_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.print(0, 0, "AB", CellStyle::default());
        fb.print(0, 1, "CD", CellStyle::default());
        let mut out = Vec::new();
        write_full_frame(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("AB\r\nCD"));
    }

    #[test]
    fn draw_swap_diffs_after_first_frame() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 1);
        fb.print(0, 0, "ABCD", CellStyle::default());
        term.draw_swap(&mut fb).unwrap();
        let first = term.writer().len();

        // Same size: `fb` came back sized, render one change into it.
        fb.print(0, 0, "ABCD", CellStyle::default());
        fb.set(3, 0, CellStyle::default().glyph('Z'));
        term.draw_swap(&mut fb).unwrap();
        let second = String::from_utf8_lossy(&term.writer()[first..]).into_owned();
        assert!(second.contains('Z'));
        assert!(!second.contains('A'));
    }

    #[test]
    fn invalidate_forces_full_redraw() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(2, 1);
        fb.print(0, 0, "OK", CellStyle::default());
        term.draw_swap(&mut fb).unwrap();

        term.invalidate();
        let before = term.writer().len();
        fb.print(0, 0, "OK", CellStyle::default());
        term.draw_swap(&mut fb).unwrap();
        let redraw = String::from_utf8_lossy(&term.writer()[before..]).into_owned();
        assert!(redraw.contains("OK"));
    }

    #[test]
    fn color_conversion_keeps_channels() {
        assert_eq!(
            to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
