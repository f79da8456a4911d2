// Activity Log - per-user append-only history of platform actions

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::ActivityEntry;

/// Per-user activity history. The stored order is forward chronological;
/// reads render a most-recent-first view without touching the stored
/// sequence, so later appends keep their place.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries_by_user: HashMap<String, Vec<ActivityEntry>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries_by_user: HashMap::new(),
        }
    }

    /// Initialize an empty history for a newly registered user.
    pub fn ensure_user(&mut self, username: &str) {
        self.entries_by_user
            .entry(username.to_string())
            .or_default();
    }

    /// Append one action for `username`.
    pub fn record(&mut self, username: &str, timestamp: NaiveDateTime, action: String) {
        self.entries_by_user
            .entry(username.to_string())
            .or_default()
            .push(ActivityEntry::new(timestamp, action));
    }

    /// The rendered history of `username`, most recent first. Returns a
    /// fresh vector on every call.
    pub fn history(&self, username: &str) -> Vec<String> {
        self.entries_by_user
            .get(username)
            .map(|entries| entries.iter().rev().map(ActivityEntry::render).collect())
            .unwrap_or_default()
    }

    /// Number of recorded actions for `username`.
    pub fn entry_count(&self, username: &str) -> usize {
        self.entries_by_user
            .get(username)
            .map(Vec::len)
            .unwrap_or(0)
    }
}
