use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

/// Default pause between two dispatched backlog events.
///
/// Roughly the length of one spoken announcement, so replayed events do not
/// talk over each other in the browser.
pub const DEFAULT_DISPATCH_INTERVAL: Duration = Duration::from_secs(3);

const PAUSED: u8 = 0b01;
const DISPATCHING: u8 = 0b10;

/// Running/Paused switch plus the dispatcher guard.
///
/// Both flags share one atomic word so that "Running and no dispatcher yet"
/// can be claimed in a single transition.
#[derive(Debug)]
pub struct PauseController {
    state: AtomicU8,
    dispatch_interval: Duration,
}

impl PauseController {
    /// Create a controller in the Running state.
    pub fn new(dispatch_interval: Duration) -> Self {
        Self {
            state: AtomicU8::new(0),
            dispatch_interval,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state.load(Ordering::SeqCst) & PAUSED != 0
    }

    /// Whether a dispatcher task currently owns the backlog.
    pub fn is_dispatching(&self) -> bool {
        self.state.load(Ordering::SeqCst) & DISPATCHING != 0
    }

    pub fn dispatch_interval(&self) -> Duration {
        self.dispatch_interval
    }

    /// Flip the pause flag. Returns the previous value.
    pub(crate) fn set_paused(&self, paused: bool) -> bool {
        let previous = if paused {
            self.state.fetch_or(PAUSED, Ordering::SeqCst)
        } else {
            self.state.fetch_and(!PAUSED, Ordering::SeqCst)
        };
        previous & PAUSED != 0
    }

    /// Claim the dispatcher slot. Succeeds only while Running and when no
    /// other dispatcher holds it.
    pub(crate) fn try_start_dispatcher(&self) -> bool {
        self.state
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |state| {
                if state & (PAUSED | DISPATCHING) == 0 {
                    Some(state | DISPATCHING)
                } else {
                    None
                }
            })
            .is_ok()
    }

    pub(crate) fn finish_dispatcher(&self) {
        self.state.fetch_and(!DISPATCHING, Ordering::SeqCst);
    }
}

impl Default for PauseController {
    fn default() -> Self {
        Self::new(DEFAULT_DISPATCH_INTERVAL)
    }
}
