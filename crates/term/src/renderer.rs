//! Flushes glyph grids to the terminal.
//!
//! A grid is sent whole after start-up, an invalidation or a size change. Later
//! grids only send the runs of glyphs that differ from what is on screen. Ink is
//! turned into colours here and nowhere else.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Ink};
use crate::types::PieceKind;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Foreground colour of a piece kind.
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => rgb(205, 49, 49),
        PieceKind::O => rgb(13, 188, 121),
        PieceKind::T => rgb(229, 229, 16),
        PieceKind::J => rgb(36, 114, 200),
        PieceKind::L => rgb(188, 63, 188),
        PieceKind::S => rgb(17, 168, 205),
        PieceKind::Z => rgb(229, 229, 229),
    }
}

/// Foreground colour and weight of an ink; `None` keeps the terminal default.
pub fn ink_style(ink: Ink) -> (Option<Color>, bool) {
    match ink {
        Ink::Blank => (None, false),
        Ink::Frame | Ink::Label => (Some(rgb(229, 229, 229)), false),
        Ink::Value => (Some(rgb(255, 255, 255)), false),
        Ink::Alert => (Some(rgb(241, 76, 76)), true),
        Ink::Locked => (Some(rgb(102, 102, 102)), false),
        Ink::Piece(kind) => (Some(piece_color(kind)), false),
    }
}

/// Owns the terminal while the game runs.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Grid currently on screen
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
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(SetAttribute(Attribute::Reset))?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Send the next grid whole, e.g. after the terminal was resized.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Bring the screen up to date with `fb`.
    ///
    /// `fb` is exchanged with the grid that was on screen, so the caller gets a
    /// buffer back to draw the next frame into without allocating.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &mut self.shown {
            Some(shown) => {
                encode_diff_into(shown, fb, &mut self.buf)?;
                std::mem::swap(shown, fb);
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                self.shown = Some(fb.clone());
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues glyphs, switching attributes only when the ink changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    ink: Option<Ink>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, ink: None }
    }

    fn write(&mut self, x: u16, y: u16, glyphs: &[Glyph]) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for glyph in glyphs {
            if self.ink != Some(glyph.ink) {
                self.switch(glyph.ink)?;
            }
            self.out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn switch(&mut self, ink: Ink) -> io::Result<()> {
        let (color, bold) = ink_style(ink);
        // SGR 0 also drops the previous foreground colour.
        self.out.queue(SetAttribute(Attribute::Reset))?;
        if let Some(color) = color {
            self.out.queue(SetForegroundColor(color))?;
        }
        if bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.ink = Some(ink);
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        if self.ink.is_some() {
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Queue a complete redraw of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        pen.write(0, y, fb.row(y))?;
    }
    pen.finish()?;
    Ok(())
}

/// Queue the changes from `prev` to `next` into `out`.
///
/// Grids of different sizes fall back to a complete redraw of `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if (prev.width(), prev.height()) != (next.width(), next.height()) {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for run in changed_runs(prev.row(y), row) {
            pen.write(run.start as u16, y, &row[run])?;
        }
    }
    pen.finish()?;
    Ok(())
}

/// Maximal ranges of positions where the two rows differ.
pub fn changed_runs<'a>(
    prev: &'a [Glyph],
    next: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |i: usize| prev.get(i) != next.get(i);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && !differs(x) {
            x += 1;
        }
        if x == next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_redraw_prints_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", Ink::Label);
        fb.put_str(0, 1, "CD", Ink::Label);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = text(out);
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
    }

    #[test]
    fn identical_grids_emit_nothing() {
        let mut a = FrameBuffer::new(4, 2);
        a.put_str(0, 0, "ok", Ink::Value);
        let b = a.clone();
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn size_change_redraws_everything() {
        let a = FrameBuffer::new(4, 2);
        let mut b = FrameBuffer::new(5, 2);
        b.put_str(0, 1, "xyz", Ink::Alert);
        let mut diff = Vec::new();
        encode_diff_into(&a, &b, &mut diff).unwrap();
        let mut full = Vec::new();
        encode_full_into(&b, &mut full).unwrap();
        assert_eq!(diff, full);
    }

    #[test]
    fn runs_cover_only_changed_glyphs() {
        let block = Glyph::new('▒', Ink::Piece(PieceKind::T));
        let prev = [Glyph::BLANK; 8];
        let mut next = prev;
        next[1] = block;
        next[2] = block;
        next[3] = block;
        next[7] = block;

        let runs: Vec<_> = changed_runs(&prev, &next).collect();
        assert_eq!(runs, vec![1..4, 7..8]);
        assert_eq!(changed_runs(&prev, &prev).count(), 0);
    }

    #[test]
    fn ink_change_alone_is_a_change() {
        let prev = [Glyph::new('▒', Ink::Piece(PieceKind::I))];
        let next = [Glyph::new('▒', Ink::Locked)];
        assert_eq!(changed_runs(&prev, &next).collect::<Vec<_>>(), vec![0..1]);
    }

    #[test]
    fn blank_ink_keeps_terminal_colours() {
        assert_eq!(ink_style(Ink::Blank), (None, false));
        assert!(ink_style(Ink::Alert).1);
        assert_eq!(
            ink_style(Ink::Piece(PieceKind::O)).0,
            Some(piece_color(PieceKind::O))
        );
    }
}
