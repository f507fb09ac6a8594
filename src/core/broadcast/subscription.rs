use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{Hub, SpeakEvent};

/// One live subscriber, owned by the stream that created it.
///
/// Yields the backlog captured at registration first, then whatever the hub
/// places in the delivery slot. Dropping the subscription unregisters it from
/// the hub, whichever way the stream ends.
pub struct Subscription {
    id: Uuid,
    backlog: VecDeque<SpeakEvent>,
    slot: mpsc::Receiver<SpeakEvent>,
    cancel: CancellationToken,
    hub: Arc<Hub>,
}

impl Subscription {
    pub(super) fn new(
        id: Uuid,
        backlog: Vec<SpeakEvent>,
        slot: mpsc::Receiver<SpeakEvent>,
        cancel: CancellationToken,
        hub: Arc<Hub>,
    ) -> Self {
        Self {
            id,
            backlog: backlog.into(),
            slot,
            cancel,
            hub,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Backlog events not yet handed out.
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Wait for the next event.
    ///
    /// Returns `None` once the cancellation token fires or the hub side of the
    /// slot is gone; the caller should then end the stream.
    pub async fn next_event(&mut self) -> Option<SpeakEvent> {
        if self.cancel.is_cancelled() {
            return None;
        }
        if let Some(event) = self.backlog.pop_front() {
            return Some(event);
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            event = self.slot.recv() => event,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.slot.close();
        self.hub.unregister(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("backlog", &self.backlog.len())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
