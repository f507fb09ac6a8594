//! Capped list of recently synthesized texts.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Most recent texts synthesized through the TTS endpoint, oldest first.
#[derive(Debug)]
pub struct RequestHistory {
    capacity: usize,
    entries: Mutex<VecDeque<String>>,
}

impl RequestHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append `text`, evicting the oldest entry once the cap is reached.
    pub fn record(&self, text: impl Into<String>) {
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(text.into());
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RequestHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
