use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::voices::parse_voice_table;
use crate::core::tts::base::{AudioClip, SpeechSynthesizer, TTSError, TTSResult, Voice};

/// Binary looked up on `PATH` when no explicit path is configured
pub const DEFAULT_ESPEAK_BINARY: &str = "espeak-ng";

const WAV_MIME_TYPE: &str = "audio/wav";

/// Local eSpeak NG synthesizer
///
/// The text is written to the process' stdin rather than passed as an
/// argument, so input starting with `-` is never read as a flag.
#[derive(Debug, Clone)]
pub struct EspeakSynthesizer {
    binary: String,
}

impl EspeakSynthesizer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    fn spawn_error(&self, e: std::io::Error) -> TTSError {
        TTSError::AudioGenerationFailed(format!("failed to run {}: {e}", self.binary))
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_ESPEAK_BINARY)
    }
}

/// Voice identifiers are language codes with optional variants (`en+f3`,
/// `roa/es`). Anything else would be handed to espeak as a flag or garbage.
fn validate_voice(voice: &str) -> TTSResult<()> {
    let valid = !voice.is_empty()
        && !voice.starts_with('-')
        && voice
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '/'));
    if valid {
        Ok(())
    } else {
        Err(TTSError::InvalidConfiguration(format!(
            "Invalid espeak voice: {voice:?}"
        )))
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<AudioClip> {
        validate_voice(voice)?;

        let mut child = self
            .command()
            .args(["-v", voice, "--stdout"])
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(text.as_bytes()).await
            && e.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }
        // Dropping stdin closes the pipe; espeak reads until EOF.

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TTSError::AudioGenerationFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(TTSError::AudioGenerationFailed(format!(
                "{} produced no audio",
                self.binary
            )));
        }

        debug!(
            voice,
            bytes = output.stdout.len(),
            "espeak synthesis complete"
        );
        Ok(AudioClip::new(output.stdout, WAV_MIME_TYPE))
    }

    async fn list_voices(&self) -> TTSResult<Vec<Voice>> {
        let output = self
            .command()
            .stdin(Stdio::null())
            .arg("--voices")
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(TTSError::AudioGenerationFailed(format!(
                "{} --voices exited with {}",
                self.binary, output.status
            )));
        }

        Ok(parse_voice_table(&String::from_utf8_lossy(&output.stdout)))
    }

    fn name(&self) -> &'static str {
        "espeak"
    }
}
