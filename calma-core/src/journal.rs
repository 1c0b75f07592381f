//! In-memory tagged journal with a "haven't written in a while" check.

use chrono::{Duration, Local, NaiveDateTime};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A journal is stale once this many seconds pass without a new entry.
pub const STALE_AFTER_SECS: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum JournalTag {
    Reflection,
    Gratitude,
    Stress,
    Goals,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub text: String,
    pub tag: JournalTag,
    pub at: NaiveDateTime,
}

impl JournalEntry {
    /// `YYYY-MM-DD HH:MM`
    pub fn timestamp(&self) -> String {
        self.at.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[derive(Debug, Default)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
    last_journal_time: Option<NaiveDateTime>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str, tag: JournalTag) -> JournalEntry {
        self.append_at(text, tag, Local::now().naive_local())
    }

    /// Appends an entry written at `at` and moves `last_journal_time` to it.
    pub fn append_at(&mut self, text: &str, tag: JournalTag, at: NaiveDateTime) -> JournalEntry {
        let entry = JournalEntry {
            text: text.to_string(),
            tag,
            at,
        };
        self.entries.push(entry.clone());
        self.last_journal_time = Some(at);
        entry
    }

    pub fn last_journal_time(&self) -> Option<NaiveDateTime> {
        self.last_journal_time
    }

    /// Staleness with the default 24h threshold.
    pub fn is_stale(&self, now: NaiveDateTime) -> bool {
        self.is_stale_after(now, Duration::seconds(STALE_AFTER_SECS))
    }

    /// `true` iff something was written and more than `threshold` has passed
    /// since. An empty journal is never stale.
    pub fn is_stale_after(&self, now: NaiveDateTime, threshold: Duration) -> bool {
        match self.last_journal_time {
            Some(last) => now - last > threshold,
            None => false,
        }
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<JournalEntry> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    pub fn all(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
