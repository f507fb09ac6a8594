use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{EventQueue, PauseController, SpeakEvent, Subscription};

/// Each subscriber holds at most one undelivered event.
pub const DELIVERY_SLOT_CAPACITY: usize = 1;

type Slot = mpsc::Sender<SpeakEvent>;

/// What `Hub::publish` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Buffered; `pending` is the queue length afterwards.
    Queued { pending: usize },
    /// Handed to the subscribers' delivery slots.
    Broadcast(FanOut),
}

/// Result of one non-blocking fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOut {
    pub delivered: usize,
    pub dropped: usize,
}

/// Single decision point for "broadcast now or buffer".
///
/// Lock order is always queue, then registry. Neither lock is held while
/// delivering into subscriber slots.
#[derive(Debug)]
pub struct Hub {
    queue: EventQueue,
    subscribers: Mutex<HashMap<Uuid, Slot>>,
    pause: PauseController,
    dropped_deliveries: AtomicU64,
}

impl Hub {
    pub fn new(dispatch_interval: Duration) -> Self {
        Self {
            queue: EventQueue::new(),
            subscribers: Mutex::new(HashMap::new()),
            pause: PauseController::new(dispatch_interval),
            dropped_deliveries: AtomicU64::new(0),
        }
    }

    /// Deliver `event` to every subscriber, or buffer it when nobody is
    /// listening or delivery is paused. Never blocks and never fails.
    pub fn publish(&self, event: SpeakEvent) -> PublishOutcome {
        let slots = {
            let mut pending = self.queue.lock();
            let subscribers = self.subscribers.lock();
            if subscribers.is_empty() || self.pause.is_paused() {
                pending.push_back(event);
                debug!(
                    pending = pending.len(),
                    subscribers = subscribers.len(),
                    paused = self.pause.is_paused(),
                    "Queued speak event"
                );
                return PublishOutcome::Queued {
                    pending: pending.len(),
                };
            }
            collect_slots(&subscribers)
        };

        debug!(subscribers = slots.len(), "Broadcasting speak event");
        PublishOutcome::Broadcast(self.fan_out(&slots, &event))
    }

    /// Add a subscriber. While Running, the whole pending queue moves into the
    /// new subscription's backlog in the same step.
    pub fn register(self: &Arc<Self>, cancel: CancellationToken) -> Subscription {
        let id = Uuid::new_v4();
        let (slot, receiver) = mpsc::channel(DELIVERY_SLOT_CAPACITY);

        let backlog = {
            let mut pending = self.queue.lock();
            self.subscribers.lock().insert(id, slot);
            if self.pause.is_paused() {
                Vec::new()
            } else {
                pending.drain(..).collect::<Vec<_>>()
            }
        };

        info!(
            subscriber = %id,
            backlog = backlog.len(),
            "Event stream subscriber registered"
        );
        Subscription::new(id, backlog, receiver, cancel, Arc::clone(self))
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unregister(&self, id: Uuid) -> bool {
        let removed = self.subscribers.lock().remove(&id).is_some();
        if removed {
            info!(subscriber = %id, "Event stream subscriber unregistered");
        }
        removed
    }

    /// Pending events, oldest first, without consuming them.
    pub fn snapshot(&self) -> Vec<SpeakEvent> {
        self.queue.peek()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    pub fn is_registered(&self, id: Uuid) -> bool {
        self.subscribers.lock().contains_key(&id)
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn pause_controller(&self) -> &PauseController {
        &self.pause
    }

    /// Total deliveries dropped because a subscriber's slot was full.
    pub fn dropped_deliveries(&self) -> u64 {
        self.dropped_deliveries.load(Ordering::Relaxed)
    }

    /// Switch between Paused and Running.
    ///
    /// Resuming starts the backlog dispatcher unless one is already active.
    /// Returns the new state.
    pub fn set_paused(self: &Arc<Self>, paused: bool) -> bool {
        let was_paused = self.pause.set_paused(paused);
        info!(paused, was_paused, "Pause state changed");

        if !paused && self.pause.try_start_dispatcher() {
            let hub = Arc::clone(self);
            tokio::spawn(async move { hub.run_dispatcher().await });
        }
        paused
    }

    /// Drain the queue one event per dispatch interval until it is empty,
    /// delivery is paused, or nobody is left to receive.
    async fn run_dispatcher(self: Arc<Self>) {
        let interval = self.pause.dispatch_interval();
        let mut dispatched = 0usize;

        loop {
            while !self.pause.is_paused() {
                let Some((event, slots)) = self.next_dispatch() else {
                    break;
                };
                let fan_out = self.fan_out(&slots, &event);
                dispatched += 1;
                debug!(
                    delivered = fan_out.delivered,
                    dropped = fan_out.dropped,
                    "Dispatched queued speak event"
                );
                tokio::time::sleep(interval).await;
            }

            self.pause.finish_dispatcher();

            // Work may have been queued between the last check and releasing the claim.
            let more_work = !self.queue.is_empty() && self.subscriber_count() > 0;
            if !more_work || !self.pause.try_start_dispatcher() {
                break;
            }
        }

        debug!(dispatched, "Queue dispatcher stopped");
    }

    /// Pop the next event together with the current subscriber slots.
    ///
    /// Leaves the queue untouched when nobody is registered, so the backlog is
    /// replayed to the next subscriber instead of being lost.
    fn next_dispatch(&self) -> Option<(SpeakEvent, Vec<(Uuid, Slot)>)> {
        let mut pending = self.queue.lock();
        let subscribers = self.subscribers.lock();
        if subscribers.is_empty() {
            return None;
        }
        let event = pending.pop_front()?;
        Some((event, collect_slots(&subscribers)))
    }

    fn fan_out(&self, slots: &[(Uuid, Slot)], event: &SpeakEvent) -> FanOut {
        let mut result = FanOut::default();
        for (id, slot) in slots {
            match slot.try_send(event.clone()) {
                Ok(()) => result.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    result.dropped += 1;
                    self.dropped_deliveries.fetch_add(1, Ordering::Relaxed);
                    warn!(subscriber = %id, "Dropped speak event for slow subscriber");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(subscriber = %id, "Subscriber closed before delivery");
                }
            }
        }
        result
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(super::DEFAULT_DISPATCH_INTERVAL)
    }
}

fn collect_slots(subscribers: &HashMap<Uuid, Slot>) -> Vec<(Uuid, Slot)> {
    subscribers
        .iter()
        .map(|(id, slot)| (*id, slot.clone()))
        .collect()
}
