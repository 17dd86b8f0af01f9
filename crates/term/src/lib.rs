//! Terminal rendering module.
//!
//! Only the visible `disp_rows x disp_cols` window of a grid is ever drawn;
//! padding stays off screen. Two outputs are provided:
//!
//! - [`GridView`] + [`TerminalRenderer`]: full-screen view rendered into a
//!   framebuffer and flushed with diffing, with a title and status line
//! - [`render_text`] + [`PlainPrinter`]: a `+-|` framed text board rewritten
//!   in place with cursor-up sequences
//!
//! Dead cells are drawn with a fill glyph, never with the seed's dead token.

pub mod fb;
pub mod grid_view;
pub mod renderer;
pub mod text;

pub use multicell_core as core;
pub use multicell_types as types;

pub use fb::{FrameBuffer, Rgb, Style, Tile};
pub use grid_view::{GridView, RenderError, Status, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, PlainPrinter, TerminalRenderer};
pub use text::render_text;
