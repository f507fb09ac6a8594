use std::collections::VecDeque;

use parking_lot::{Mutex, MutexGuard};

use super::SpeakEvent;

/// Thread-safe FIFO of pending speak events.
///
/// Unbounded and memory-only. Every operation takes the internal lock for the
/// duration of a single call, so readers always observe a consistent snapshot.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Mutex<VecDeque<SpeakEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&self, event: SpeakEvent) {
        self.events.lock().push_back(event);
    }

    pub fn pop_front(&self) -> Option<SpeakEvent> {
        self.events.lock().pop_front()
    }

    /// Remove and return every pending event in FIFO order.
    pub fn drain_all(&self) -> Vec<SpeakEvent> {
        self.events.lock().drain(..).collect()
    }

    /// Non-destructive copy of the pending events in FIFO order.
    pub fn peek(&self) -> Vec<SpeakEvent> {
        self.events.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Hold the queue lock across a compound decision.
    ///
    /// The hub uses this to make "check subscribers, then buffer" and
    /// "register, then drain" single transitions.
    pub(crate) fn lock(&self) -> MutexGuard<'_, VecDeque<SpeakEvent>> {
        self.events.lock()
    }
}
