//! Terminal output: full-screen framebuffer flushing and plain line output.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

/// Full-screen renderer (raw mode, alternate screen).
///
/// Each frame is diffed against the previous one and only changed runs are
/// written.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then keep it as the baseline for the next diff.
    ///
    /// On return `fb` holds the previous frame, ready to be drawn over.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Line-oriented output: print a text frame, then move the cursor back to
/// its first line so the next frame overwrites it in place.
pub struct PlainPrinter<W: Write> {
    out: W,
    rewind: u16,
}

impl<W: Write> PlainPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rewind: 0 }
    }

    pub fn print(&mut self, frame: &str) -> Result<()> {
        if self.rewind > 0 {
            self.out.queue(cursor::MoveUp(self.rewind))?;
        }
        for line in frame.lines() {
            self.out.queue(Print(line))?;
            self.out.queue(Print("\n"))?;
        }
        self.out.flush()?;
        self.rewind = frame.lines().count() as u16;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut current: Option<Style> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let tile = fb.get(x, y).unwrap_or_default();
            if current != Some(tile.style) {
                apply_style_into(out, tile.style)?;
                current = Some(tile.style);
            }
            out.queue(Print(tile.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of tiles that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Style> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let tile = next.get(x + dx, y).unwrap_or_default();
            if current != Some(tile.style) {
                apply_style_into(out, tile.style)?;
                current = Some(tile.style);
            }
            out.queue(Print(tile.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` runs of changed tiles, row by row. Both buffers must have
/// the same size.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start = None;
        for x in 0..next.width() {
            let same = prev.get(x, y) == next.get(x, y);
            match (start, same) {
                (None, false) => start = Some(x),
                (Some(s), true) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_tiles() {
        let style = Style::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);

        for x in 1..=3 {
            b.put(x, 0, 'X', style);
        }
        b.put(5, 1, 'Y', style);

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(3, 3);
        assert!(changed_runs(&a, &a.clone()).is_empty());
    }

    #[test]
    fn plain_printer_rewinds_previous_frame() {
        let mut printer = PlainPrinter::new(Vec::new());
        printer.print("ab\ncd\n").unwrap();
        printer.print("ef\ngh\n").unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();

        assert!(out.starts_with("ab\ncd\n"));
        // Cursor-up by two lines (CSI 2 A) precedes the second frame.
        assert!(out.contains("\x1b[2Aef\ngh\n"));
    }

    #[test]
    fn style_sets_bold_only_when_asked() {
        let mut plain = Vec::new();
        apply_style_into(&mut plain, Style::default()).unwrap();
        let mut bold = Vec::new();
        apply_style_into(&mut bold, Style::default().bold()).unwrap();

        // SGR 1 is bold, SGR 2 is dim.
        assert!(!String::from_utf8(plain).unwrap().contains("\x1b[1m"));
        let bold = String::from_utf8(bold).unwrap();
        assert!(bold.contains("\x1b[1m"));
        assert!(!bold.contains("\x1b[2m"));
    }
}
