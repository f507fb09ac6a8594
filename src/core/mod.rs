pub mod broadcast;
pub mod history;
pub mod tts;

pub use broadcast::{Hub, PublishOutcome, SpeakEvent, Subscription};
pub use history::RequestHistory;
pub use tts::{
    AudioClip, SpeechSynthesizer, TTSError, TTSResult, Voice, VoiceRouter, create_synthesizer,
};
