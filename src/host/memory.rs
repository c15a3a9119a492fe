use super::{BaseSink, HashChange, Location};

use std::collections::VecDeque;

/// A [`Location`] kept in memory.
///
/// Every `set_hash` updates the current hash and queues a [`HashChange`];
/// the owner drains the queue with [`next_event`](Self::next_event) and feeds
/// the events back into the router.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    hash: String,
    pending: VecDeque<HashChange>,
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            pending: VecDeque::new(),
            history: Vec::new(),
        }
    }

    pub fn next_event(&mut self) -> Option<HashChange> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Hashes written through `set_hash`, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.hash.clone()
    }

    fn set_hash(&mut self, hash: &str) {
        if self.hash == hash {
            return;
        }
        self.hash = hash.to_owned();
        self.history.push(hash.to_owned());
        self.pending.push_back(HashChange::new(hash));
    }
}

/// A [`BaseSink`] kept in memory. The element does not exist until the first write.
#[derive(Debug, Default)]
pub struct MemoryBase {
    href: Option<String>,
    writes: usize,
}

impl MemoryBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BaseSink for MemoryBase {
    fn set_base(&mut self, base: &str) {
        let href = self.href.get_or_insert_with(String::new);
        href.clear();
        href.push_str(base);
        self.writes += 1;
    }
}
