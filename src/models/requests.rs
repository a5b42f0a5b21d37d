use serde::Deserialize;

use crate::error::{NormalizerError, Result};

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub transcript: String,
    /// Caller locale ("fr", "fr-CA"); the server default when absent
    #[serde(default)]
    pub language: Option<String>,
}

impl NormalizeRequest {
    /// Reject requests that cannot be normalized
    pub fn validate(&self) -> Result<()> {
        if self.transcript.trim().is_empty() {
            return Err(NormalizerError::EmptyTranscript);
        }
        Ok(())
    }
}
