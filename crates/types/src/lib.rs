//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the grid,
//! the engine, the renderer and the driver alike.
//!
//! # Defaults
//!
//! Default values only seed [`SimConfig`] and the command line; nothing reads
//! them as ambient state.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_PADDING` | 5 | Hidden margin around the visible board |
//! | `DEFAULT_INTERVAL_SECS` | 0.05 | Delay between generations |
//! | `DEFAULT_DEAD_CHAR` | `.` | Dead token in seed files |
//! | `DEFAULT_FILL_CHAR` | ` ` | Glyph drawn for dead cells |
//! | `DEFAULT_SEED_ROWS` | 20 | Rows written by the seed generator |
//! | `DEFAULT_SEED_COLS` | 20 | Columns written by the seed generator |
//! | `MAX_PADDING` | 1000 | Upper bound accepted for padding |
//!
//! # Examples
//!
//! ```
//! use multicell_types::{Cell, SimConfig};
//!
//! let cell = Cell::Alive('A');
//! assert!(cell.is_alive());
//! assert_eq!(cell.identity(), Some('A'));
//! assert_eq!(Cell::default(), Cell::Dead);
//!
//! let config = SimConfig::new(5, 0.05).unwrap();
//! assert_eq!(config.padding, 5);
//! assert!(SimConfig::new(5, -1.0).is_err());
//! assert!(config.with_glyphs('.', '.').is_err());
//! ```

use std::time::Duration;

use thiserror::Error;

/// Window title printed above the board.
pub const TITLE: &str = "Multicell: Conway's Game of Life with a twist.";

/// Hidden dead margin around the visible region.
pub const DEFAULT_PADDING: usize = 5;

/// Seconds between generations.
pub const DEFAULT_INTERVAL_SECS: f64 = 0.05;

/// Dead token used in seed files.
pub const DEFAULT_DEAD_CHAR: char = '.';

/// Glyph drawn in place of dead cells.
pub const DEFAULT_FILL_CHAR: char = ' ';

/// Seed generator defaults.
pub const DEFAULT_SEED_ROWS: usize = 20;
pub const DEFAULT_SEED_COLS: usize = 20;
pub const DEFAULT_SEED_FILE: &str = "seed.txt";

/// Bounds for the interval adjusted from the keyboard while running.
pub const MIN_INTERVAL_SECS: f64 = 0.01;
pub const MAX_INTERVAL_SECS: f64 = 5.0;

/// Largest accepted padding. The padded grid is allocated up front.
pub const MAX_PADDING: usize = 1000;

/// A single grid position.
///
/// Live cells carry their identity ("colour") character; plain Life is the
/// case where every live cell shares one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive(char),
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    pub fn identity(self) -> Option<char> {
        match self {
            Cell::Alive(id) => Some(id),
            Cell::Dead => None,
        }
    }

    /// Glyph for this cell, `fill` standing in for dead cells.
    pub fn glyph(self, fill: char) -> char {
        self.identity().unwrap_or(fill)
    }
}

/// Actions the driver loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverAction {
    TogglePause,
    /// Advance exactly one generation (only meaningful while paused).
    Step,
    /// Reload the initial seed grid.
    Restart,
    Faster,
    Slower,
    Quit,
}

/// Configuration errors, raised before any grid is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("--time-interval must not be negative (got {0})")]
    NegativeInterval(f64),
    #[error("--time-interval must be a finite number (got {0})")]
    NonFiniteInterval(f64),
    #[error("--time-interval is too large (got {0})")]
    IntervalTooLarge(f64),
    #[error("--padding must be at most {max} (got {padding})")]
    PaddingTooLarge { padding: usize, max: usize },
    #[error("dead token and fill glyph must differ (both {0:?})")]
    DeadEqualsFill(char),
    #[error("{which} must be a printable character (got {ch:?})")]
    ControlChar { which: &'static str, ch: char },
}

/// Simulation settings passed explicitly into constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub padding: usize,
    pub interval: Duration,
    pub dead_char: char,
    pub fill_char: char,
}

impl SimConfig {
    /// Build a config, validating padding and interval.
    pub fn new(padding: usize, interval_secs: f64) -> Result<Self, ConfigError> {
        if padding > MAX_PADDING {
            return Err(ConfigError::PaddingTooLarge {
                padding,
                max: MAX_PADDING,
            });
        }
        Ok(Self {
            padding,
            interval: parse_interval(interval_secs)?,
            dead_char: DEFAULT_DEAD_CHAR,
            fill_char: DEFAULT_FILL_CHAR,
        })
    }

    /// Set the seed's dead token and the glyph drawn for dead cells.
    pub fn with_glyphs(mut self, dead_char: char, fill_char: char) -> Result<Self, ConfigError> {
        for (which, ch) in [("dead token", dead_char), ("fill glyph", fill_char)] {
            if ch.is_control() {
                return Err(ConfigError::ControlChar { which, ch });
            }
        }
        if dead_char == fill_char {
            return Err(ConfigError::DeadEqualsFill(dead_char));
        }
        self.dead_char = dead_char;
        self.fill_char = fill_char;
        Ok(self)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            interval: Duration::from_secs_f64(DEFAULT_INTERVAL_SECS),
            dead_char: DEFAULT_DEAD_CHAR,
            fill_char: DEFAULT_FILL_CHAR,
        }
    }
}

/// Validate a generation interval given in seconds.
pub fn parse_interval(secs: f64) -> Result<Duration, ConfigError> {
    if !secs.is_finite() {
        return Err(ConfigError::NonFiniteInterval(secs));
    }
    if secs < 0.0 {
        return Err(ConfigError::NegativeInterval(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::IntervalTooLarge(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_padding_5_interval_50ms() {
        let config = SimConfig::default();
        assert_eq!(config.padding, 5);
        assert_eq!(config.interval, Duration::from_millis(50));
        assert_eq!(config.dead_char, '.');
        assert_eq!(config.fill_char, ' ');
    }

    #[test]
    fn negative_interval_rejected() {
        assert_eq!(
            SimConfig::new(5, -0.5),
            Err(ConfigError::NegativeInterval(-0.5))
        );
    }

    #[test]
    fn nan_interval_rejected() {
        assert!(matches!(
            SimConfig::new(5, f64::NAN),
            Err(ConfigError::NonFiniteInterval(_))
        ));
    }

    #[test]
    fn huge_interval_rejected() {
        assert_eq!(
            SimConfig::new(5, 1e300),
            Err(ConfigError::IntervalTooLarge(1e300))
        );
        assert!(parse_interval(1e300).is_err());
    }

    #[test]
    fn padding_above_limit_rejected() {
        assert!(SimConfig::new(MAX_PADDING, 0.05).is_ok());
        assert_eq!(
            SimConfig::new(usize::MAX / 2 + 1, 0.05),
            Err(ConfigError::PaddingTooLarge {
                padding: usize::MAX / 2 + 1,
                max: MAX_PADDING
            })
        );
    }

    #[test]
    fn zero_interval_allowed() {
        let config = SimConfig::new(0, 0.0).unwrap();
        assert_eq!(config.interval, Duration::ZERO);
        assert_eq!(config.padding, 0);
    }

    #[test]
    fn dead_and_fill_must_differ() {
        let config = SimConfig::default();
        assert_eq!(
            config.with_glyphs(' ', ' '),
            Err(ConfigError::DeadEqualsFill(' '))
        );
        let swapped = config.with_glyphs(' ', '.').unwrap();
        assert_eq!((swapped.dead_char, swapped.fill_char), (' ', '.'));
    }

    #[test]
    fn control_chars_rejected() {
        assert!(matches!(
            SimConfig::default().with_glyphs('\t', ' '),
            Err(ConfigError::ControlChar { .. })
        ));
    }

    #[test]
    fn cell_glyph_uses_fill_for_dead() {
        assert_eq!(Cell::Dead.glyph(' '), ' ');
        assert_eq!(Cell::Alive('x').glyph(' '), 'x');
    }
}
