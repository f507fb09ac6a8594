//! Speak-event broadcast hub
//!
//! Fans "speak now" events out to every connected event stream, buffers them
//! while nobody is listening or delivery is paused, and replays the buffer
//! once a listener (re)connects.
//!
//! - `queue` - FIFO of pending events
//! - `hub` - registry of subscribers and the deliver-or-buffer decision
//! - `pause` - Running/Paused switch and dispatcher guard
//! - `subscription` - per-connection delivery handle

mod hub;
mod pause;
mod queue;
mod subscription;

pub use hub::{DELIVERY_SLOT_CAPACITY, FanOut, Hub, PublishOutcome};
pub use pause::{DEFAULT_DISPATCH_INTERVAL, PauseController};
pub use queue::EventQueue;
pub use subscription::Subscription;

use serde::{Deserialize, Serialize};

/// A text payload to announce to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakEvent {
    pub text: String,
    /// Voice hint from the producer. Carried along, never interpreted by the hub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

impl SpeakEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        let voice = voice.into();
        self.voice = (!voice.is_empty()).then_some(voice);
        self
    }
}
