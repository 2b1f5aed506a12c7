//! High score leaderboard system
//!
//! Persisted to a plain text file, tracks the top 100 scores. Each line is
//! `<score> <timestamp>`; the file is rewritten in full on every change.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::{LEADERBOARD_CAPACITY, TIMESTAMP_FORMAT};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = LEADERBOARD_CAPACITY;

/// Leaderboard persistence failures
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to read leaderboard {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write leaderboard {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed leaderboard line {line}: {text:?}")]
    Malformed { line: usize, text: String },
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Final score of the run
    pub score: u32,
    /// Local wall-clock time the run ended, human readable
    pub timestamp: String,
}

impl LeaderboardEntry {
    /// Parse one `<score> <timestamp>` line
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (score, timestamp) = line.trim_start().split_once(char::is_whitespace)?;
        let score = score.parse().ok()?;
        let timestamp = timestamp.trim_start();
        if timestamp.is_empty() {
            return None;
        }
        Some(Self {
            score,
            timestamp: timestamp.to_string(),
        })
    }
}

/// High score leaderboard, sorted descending by score
///
/// Ties keep insertion order. The board never shrinks; once full, a new score
/// only gets in by beating the current lowest entry.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    /// Backing file; `None` keeps the board in memory only
    path: Option<PathBuf>,
}

impl Leaderboard {
    /// Create an empty leaderboard with no backing file
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create an empty leaderboard that persists to `path`
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: Some(path.into()),
        }
    }

    /// Load from `path`, best effort
    ///
    /// A missing or unreadable file yields an empty board that still persists
    /// to `path`. Reading stops at the first malformed line.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut board = Self::with_path(path.clone());
        match board.try_load() {
            Ok(()) => log::info!("Loaded {} high scores from {}", board.len(), path.display()),
            Err(LeaderboardError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("No high scores at {}, starting fresh", path.display());
            }
            Err(e) => log::warn!("{e}; keeping {} entries read so far", board.len()),
        }
        board
    }

    /// Read the backing file into this board, replacing its entries
    ///
    /// Entries parsed before a malformed line are kept even when an error is
    /// returned.
    pub fn try_load(&mut self) -> Result<(), LeaderboardError> {
        self.entries.clear();
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        let text = fs::read_to_string(&path).map_err(|source| LeaderboardError::Read {
            path: path.clone(),
            source,
        })?;

        let mut result = Ok(());
        for (i, line) in text.lines().enumerate() {
            if self.entries.len() >= MAX_HIGH_SCORES {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match LeaderboardEntry::parse(line) {
                Some(entry) => self.entries.push(entry),
                None => {
                    result = Err(LeaderboardError::Malformed {
                        line: i + 1,
                        text: line.to_string(),
                    });
                    break;
                }
            }
        }
        // Stable: equal scores keep file order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        result
    }

    /// Write every entry, in order, replacing the backing file
    pub fn persist(&self) -> Result<(), LeaderboardError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut text = String::with_capacity(self.entries.len() * 32);
        for entry in &self.entries {
            text.push_str(&format!("{} {}\n", entry.score, entry.timestamp));
        }
        fs::write(path, text).map_err(|source| LeaderboardError::Write {
            path: path.clone(),
            source,
        })
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished run stamped with the current local time
    ///
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    /// A failed save is logged and leaves the in-memory board updated.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.record_at(score, timestamp)
    }

    /// Record a finished run with an explicit timestamp
    ///
    /// Line breaks in `timestamp` become spaces so each entry stays one line
    /// in the backing file.
    pub fn record_at(&mut self, score: u32, timestamp: impl Into<String>) -> Option<usize> {
        if !self.qualifies(score) {
            log::debug!("Score {score} did not make the leaderboard");
            return None;
        }

        let entry = LeaderboardEntry {
            score,
            timestamp: timestamp.into().replace(['\r', '\n'], " "),
        };

        // Insert after every entry that scores at least as much
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size (drops the displaced lowest score)
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("Score {score} recorded at rank {rank}");
        if let Err(e) = self.persist() {
            log::warn!("{e}");
        }

        Some(rank)
    }

    /// Write the full listing, for shutdown diagnostics
    pub fn dump_all<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "--- FULL LEADERBOARD ---")?;
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(out, "{}. {} points ({})", i + 1, entry.score, entry.timestamp)?;
        }
        writeln!(out, "------------------------")?;
        out.flush()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The best `n` entries
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
