//! Puzzles read from a text file, one per line

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{parse_puzzle_lines, Difficulty, PuzzleSource, SourceError};
use crate::puzzle::Puzzle;

/// Source backed by a file of previously generated puzzles.
///
/// The difficulty is not checked; the file is trusted to match it.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PuzzleSource for FileSource {
    fn generate(&mut self, count: usize, difficulty: Difficulty) -> Result<Vec<Puzzle>, SourceError> {
        debug!(path = %self.path.display(), %difficulty, "reading puzzles from file");
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let puzzles = parse_puzzle_lines(&text, count)?;
        info!(count = puzzles.len(), path = %self.path.display(), "loaded puzzles");
        Ok(puzzles)
    }
}
