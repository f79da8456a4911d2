// Content ID Generator - creator-prefixed ids over one shared counter
// ID format: "<creator>-<sequence>", sequence shared across creators and kinds

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::ContentId;

/// Generates content ids of the form `"<creator>-<sequence>"`.
///
/// One counter is shared by every creator and both content kinds, so the
/// sequence is globally monotonic: ids are never reused and never reset
/// within a process lifetime. The counter is atomic, which keeps id
/// generation race-free even if the store is later shared across threads.
///
/// An instance is owned by the content store rather than held as a process
/// global, so tests can build isolated stores with predictable sequences.
#[derive(Debug, Default)]
pub struct ContentIdGenerator {
    sequence: AtomicU64,
}

impl ContentIdGenerator {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Generate the next id for `creator` and advance the shared counter.
    pub fn next_id(&self, creator: &str) -> ContentId {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", creator, sequence)
    }

    /// The sequence number the next id will carry.
    pub fn current_sequence(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }

    /// Extract the creator username from a content id.
    pub fn extract_creator(id: &str) -> Option<&str> {
        id.rsplit_once('-').map(|(creator, _)| creator)
    }

    /// Extract the sequence number from a content id.
    pub fn extract_sequence(id: &str) -> Option<u64> {
        id.rsplit_once('-')
            .and_then(|(_, sequence)| sequence.parse().ok())
    }
}
