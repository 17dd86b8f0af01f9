//! GridView: maps the visible part of a `Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use thiserror::Error;

use crate::core::Grid;
use crate::fb::{FrameBuffer, Rgb, Style, Tile};
use crate::types::{Cell, DEFAULT_FILL_CHAR, TITLE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(
        "terminal is too small: board needs {needed_w}x{needed_h}, terminal is {width}x{height}"
    )]
    DisplayTooSmall {
        needed_w: usize,
        needed_h: usize,
        width: u16,
        height: u16,
    },
}

/// Driver state shown under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    pub generation: u64,
    pub paused: bool,
    pub interval_ms: u64,
}

/// Identity colours, assigned by character code.
const PALETTE: [Rgb; 8] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(230, 230, 230),
];

const BORDER: Style = Style::fg(Rgb::new(200, 200, 200));
const TITLE_STYLE: Style = Style::fg(Rgb::new(220, 220, 220)).bold();
const STATUS_STYLE: Style = Style::fg(Rgb::new(160, 160, 170));

/// Rows used around the board: title, two borders, status line.
const CHROME_ROWS: usize = 4;

pub struct GridView {
    fill: char,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL_CHAR,
        }
    }
}

impl GridView {
    pub fn new(fill: char) -> Self {
        Self { fill }
    }

    /// Terminal size needed to show `grid`.
    pub fn required_size(grid: &Grid) -> (usize, usize) {
        (grid.disp_cols() + 2, grid.disp_rows() + CHROME_ROWS)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        grid: &Grid,
        status: &Status,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Result<(), RenderError> {
        let (needed_w, needed_h) = Self::required_size(grid);
        if needed_w > viewport.width as usize || needed_h > viewport.height as usize {
            return Err(RenderError::DisplayTooSmall {
                needed_w,
                needed_h,
                width: viewport.width,
                height: viewport.height,
            });
        }

        fb.resize(viewport.width, viewport.height);
        fb.clear(Tile::default());

        // Both fit in u16 after the size check.
        let frame_w = needed_w as u16;
        let frame_h = (grid.disp_rows() + 2) as u16;
        let x0 = (viewport.width - frame_w) / 2;
        let y0 = (viewport.height - needed_h as u16) / 2;

        fb.put_str(x0, y0, TITLE, TITLE_STYLE);
        self.draw_border(fb, x0, y0 + 1, frame_w, frame_h);

        for row in 0..grid.disp_rows() {
            for col in 0..grid.disp_cols() {
                let x = x0 + 1 + col as u16;
                let y = y0 + 2 + row as u16;
                match grid.visible(row, col) {
                    Cell::Alive(id) => fb.put(x, y, id, identity_style(id)),
                    Cell::Dead => fb.put(x, y, self.fill, Style::default()),
                }
            }
        }

        let line = status_line(grid, status);
        fb.put_str(x0, y0 + 1 + frame_h, &line, STATUS_STYLE);
        Ok(())
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        status: &Status,
        viewport: Viewport,
    ) -> Result<FrameBuffer, RenderError> {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, viewport, &mut fb)?;
        Ok(fb)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put(x, y, '+', BORDER);
        fb.put(x + w - 1, y, '+', BORDER);
        fb.put(x, y + h - 1, '+', BORDER);
        fb.put(x + w - 1, y + h - 1, '+', BORDER);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '-', BORDER);
            fb.put(x + dx, y + h - 1, '-', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '|', BORDER);
            fb.put(x + w - 1, y + dy, '|', BORDER);
        }
    }
}

fn identity_style(id: char) -> Style {
    Style::fg(PALETTE[id as usize % PALETTE.len()]).bold()
}

fn status_line(grid: &Grid, status: &Status) -> String {
    let state = if status.paused { "PAUSED" } else { "running" };
    format!(
        "gen {}  pop {}  {}ms  {}  [p]ause [n]ext [r]estart [+/-] [q]uit",
        status.generation,
        grid.visible_population(),
        status.interval_ms,
        state
    )
}
