//! Puzzle strings as produced by a generator

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::layout::GRID_CELLS;

/// Character marking an empty cell
pub const BLANK_MARKER: char = '.';

/// Number of characters in a one-line puzzle
pub const PUZZLE_LEN: usize = GRID_CELLS * GRID_CELLS;

/// Errors in a puzzle string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle must have 81 cells, got {len}")]
    Length { len: usize },

    #[error("invalid character {found:?} at cell {position} (expected 1-9 or '.')")]
    InvalidCharacter { position: usize, found: char },
}

/// A validated 81-character puzzle over `1`-`9` and [`BLANK_MARKER`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle(String);

impl Puzzle {
    /// Validate a single-line puzzle string
    pub fn parse(line: &str) -> Result<Self, PuzzleError> {
        let len = line.chars().count();
        if len != PUZZLE_LEN {
            return Err(PuzzleError::Length { len });
        }
        if let Some((position, found)) = line
            .chars()
            .enumerate()
            .find(|(_, c)| *c != BLANK_MARKER && !matches!(c, '1'..='9'))
        {
            return Err(PuzzleError::InvalidCharacter { position, found });
        }
        Ok(Self(line.to_string()))
    }

    /// Character at a string index, or `None` for a blank cell
    pub fn cell(&self, index: usize) -> Option<char> {
        // validated as ASCII, so bytes and chars line up
        let c = *self.0.as_bytes().get(index)? as char;
        (c != BLANK_MARKER).then_some(c)
    }

    /// Number of filled cells
    pub fn given_count(&self) -> usize {
        self.0.chars().filter(|c| *c != BLANK_MARKER).count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
