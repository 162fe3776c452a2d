//! Bounded log of committed placements.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::PlacementSnapshot;

/// Snapshots recorded after each committed edit, oldest first.
///
/// When the log is full the oldest entry is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<PlacementSnapshot>,
    max_entries: usize,
}

impl HistoryLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn record(&mut self, snapshot: PlacementSnapshot) {
        if self.max_entries == 0 {
            return;
        }
        self.entries.push_back(snapshot);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&PlacementSnapshot> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacementSnapshot> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
