use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::ServerConfig;
use crate::core::broadcast::Hub;
use crate::core::history::RequestHistory;
use crate::core::tts::{SpeechSynthesizer, TTSResult, create_synthesizer};

/// Shared application state handed to every handler
pub struct AppState {
    pub config: ServerConfig,
    pub hub: Arc<Hub>,
    pub history: RequestHistory,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    /// Root shutdown signal. Every event stream holds a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Build the state with the voice router described by `config`.
    pub fn new(config: ServerConfig) -> TTSResult<Arc<Self>> {
        let synthesizer = create_synthesizer(&config)?;
        info!(
            default_voice = synthesizer.default_voice(),
            elevenlabs = config.has_elevenlabs(),
            "Speech synthesis ready"
        );
        Ok(Self::with_synthesizer(config, Arc::new(synthesizer)))
    }

    /// Build the state around an existing synthesizer.
    pub fn with_synthesizer(
        config: ServerConfig,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Arc<Self> {
        let hub = Arc::new(Hub::new(config.dispatch_interval()));
        let history = RequestHistory::new(config.history_capacity);
        Arc::new(Self {
            config,
            hub,
            history,
            synthesizer,
            shutdown: CancellationToken::new(),
        })
    }
}
