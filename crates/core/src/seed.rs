//! Seed module - parsing and validating starting layouts
//!
//! A seed is a rectangular block of text, one grid row per line. Each
//! character is either the dead token or a live-cell identity. Everything the
//! engine relies on (equal row lengths, a known alphabet) is checked here, so a
//! `Seed` that exists is always valid.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Cell, SimConfig};

/// Errors raised while loading a seed, before any grid is built.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed is empty")]
    Empty,
    #[error("seed line {line} has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("seed line {line}, column {column}: {ch:?} is not a valid cell character")]
    InvalidChar { line: usize, column: usize, ch: char },
    #[error("seed line {line}, column {column}: {ch:?} is not one of the allowed identities")]
    UnknownIdentity { line: usize, column: usize, ch: char },
}

/// Which characters may stand for live cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySet {
    /// Any printable character other than the dead token and fill glyph.
    Open,
    /// Only these characters. A single entry is plain boolean Life.
    Only(BTreeSet<char>),
}

/// Seed alphabet: one dead token plus the allowed identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    dead: char,
    fill: char,
    identities: IdentitySet,
}

impl Alphabet {
    pub fn new(dead: char, fill: char, identities: IdentitySet) -> Self {
        Self {
            dead,
            fill,
            identities,
        }
    }

    /// Open alphabet using the config's dead token and fill glyph.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.dead_char, config.fill_char, IdentitySet::Open)
    }

    /// Restrict identities to the characters of `chars`.
    pub fn restricted_to(mut self, chars: &str) -> Self {
        self.identities = IdentitySet::Only(chars.chars().collect());
        self
    }

    pub fn dead(&self) -> char {
        self.dead
    }

    pub fn identities(&self) -> &IdentitySet {
        &self.identities
    }

    /// Classify one seed character.
    fn classify(&self, ch: char, line: usize, column: usize) -> Result<Cell, SeedError> {
        if ch == self.dead {
            return Ok(Cell::Dead);
        }
        if ch.is_control() || ch.is_whitespace() || ch == self.fill {
            return Err(SeedError::InvalidChar { line, column, ch });
        }
        match &self.identities {
            IdentitySet::Open => Ok(Cell::Alive(ch)),
            IdentitySet::Only(allowed) if allowed.contains(&ch) => Ok(Cell::Alive(ch)),
            IdentitySet::Only(_) => Err(SeedError::UnknownIdentity { line, column, ch }),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// A validated, rectangular starting layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Seed {
    /// Parse seed text. Line terminators (`\n`, `\r\n`) and a leading
    /// byte-order mark are stripped; a trailing newline on the last row is
    /// optional.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, SeedError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            let found = line.chars().count();
            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(SeedError::Ragged {
                    line: line_no,
                    expected,
                    found,
                });
            }
            for (j, ch) in line.chars().enumerate() {
                cells.push(alphabet.classify(ch, line_no, j + 1)?);
            }
            rows += 1;
        }

        let cols = cols.unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(SeedError::Empty);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Read and parse a seed file.
    pub fn load(path: impl AsRef<Path>, alphabet: &Alphabet) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::parse(&text, alphabet)?;
        log::info!(
            "loaded {}x{} seed from {} with identities {:?}",
            seed.rows,
            seed.cols,
            path.display(),
            seed.identities()
        );
        Ok(seed)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Distinct identities present in the seed, sorted.
    pub fn identities(&self) -> BTreeSet<char> {
        self.cells.iter().filter_map(|cell| cell.identity()).collect()
    }
}

/// Text of a `rows x cols` seed filled entirely with `fill`.
pub fn blank_seed(rows: usize, cols: usize, fill: char) -> String {
    let mut out = String::with_capacity(rows * (cols + 1));
    for _ in 0..rows {
        out.extend(std::iter::repeat(fill).take(cols));
        out.push('\n');
    }
    out
}
