//! Key transcript
//!
//! Records every key a session received together with the display it left
//! behind. Bounded so a long-running session cannot grow without limit.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What happened to a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The engine accepted the key
    Applied,
    /// The key was swallowed; the display did not change
    Ignored {
        /// Why the engine refused it
        reason: String,
    },
}

impl Outcome {
    /// Returns true if the key was applied
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A single key press and the display after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Raw key identifier as received
    pub key: String,
    /// Display after the key was handled
    pub display: String,
    /// Whether the key was applied
    pub outcome: Outcome,
}

impl TranscriptEntry {
    /// Creates an entry for an applied key
    #[must_use]
    pub fn applied(key: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display: display.into(),
            outcome: Outcome::Applied,
        }
    }

    /// Creates an entry for an ignored key
    #[must_use]
    pub fn ignored(
        key: impl Into<String>,
        display: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display: display.into(),
            outcome: Outcome::Ignored {
                reason: reason.into(),
            },
        }
    }

    /// Returns a one-line rendering, e.g. `+ -> 3` or `. -> 0. (ignored: ...)`
    #[must_use]
    pub fn display_line(&self) -> String {
        match &self.outcome {
            Outcome::Applied => format!("{} -> {}", self.key, self.display),
            Outcome::Ignored { reason } => {
                format!("{} -> {} (ignored: {reason})", self.key, self.display)
            }
        }
    }
}

/// Bounded list of transcript entries, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    max_entries: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Default maximum transcript size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a transcript with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a transcript holding at most `max_entries` entries
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry, dropping the oldest one when full
    pub fn push(&mut self, entry: TranscriptEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the transcript is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.back()
    }

    /// Number of ignored keys
    #[must_use]
    pub fn ignored_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.outcome.is_applied())
            .count()
    }

    /// Serializes the entries to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes entries from JSON into a transcript of default capacity
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TranscriptEntry> = serde_json::from_str(json)?;
        let mut transcript = Self::new();
        for entry in entries {
            transcript.push(entry);
        }
        Ok(transcript)
    }

    /// Exports the transcript one entry per line
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(TranscriptEntry::display_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
