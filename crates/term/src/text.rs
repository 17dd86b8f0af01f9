//! Plain-text board frames, for line-oriented output and tests.

use crate::core::Grid;

/// The visible window of `grid` framed with `+`, `-` and `|`.
///
/// Dead cells print as `fill`, live cells as their identity. Every line,
/// including the last, ends with `\n`.
pub fn render_text(grid: &Grid, fill: char) -> String {
    let cols = grid.disp_cols();
    let mut border = String::with_capacity(cols + 3);
    border.push('+');
    border.extend(std::iter::repeat('-').take(cols));
    border.push('+');
    border.push('\n');

    let mut out = String::with_capacity((grid.disp_rows() + 2) * border.len());
    out.push_str(&border);
    for row in 0..grid.disp_rows() {
        out.push('|');
        for col in 0..cols {
            out.push(grid.visible(row, col).glyph(fill));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}
