//! Multicell (workspace facade crate).
//!
//! Conway's Game of Life where live cells carry an identity character. This
//! package exposes the `multicell::{core,engine,input,term,types}` API while the
//! implementation lives in dedicated crates under `crates/`.

pub use multicell_core as core;
pub use multicell_engine as engine;
pub use multicell_input as input;
pub use multicell_term as term;
pub use multicell_types as types;
