use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Text the provider wrapper substitutes when a completion carries no content
/// ("scoring failed"). It never matches a dimension, so it scores as empty.
pub const PROVIDER_FAILURE: &str = "评分失败";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    Empty(String),
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Option<Vec<ChatChoice>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl ChatCompletion {
    fn is_completion(&self) -> bool {
        self.choices.is_some() || self.error.is_some()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Reads a saved model reply from `path`, or from stdin when `path` is `-`.
pub fn load_response(path: &Path) -> Result<String, InputError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    if raw.trim().is_empty() {
        return Err(InputError::Empty(format!(
            "response {} is empty",
            path.display()
        )));
    }
    Ok(extract_model_text(&raw))
}

/// Unwraps a chat-completions body to `choices[0].message.content`.
///
/// Only objects carrying `choices` or `error` count as a completion body; any other
/// input, JSON or not, is taken to be the reply text itself.
pub fn extract_model_text(raw: &str) -> String {
    let trimmed = raw.trim_start();
    if !trimmed.starts_with('{') {
        return raw.to_string();
    }
    match serde_json::from_str::<ChatCompletion>(trimmed) {
        Ok(body) if body.is_completion() => {
            let content = body
                .choices
                .unwrap_or_default()
                .into_iter()
                .next()
                .and_then(|c| c.message)
                .and_then(|m| m.content)
                .filter(|c| !c.trim().is_empty());
            match content {
                Some(text) => {
                    debug!(chars = text.chars().count(), "unwrapped chat completion");
                    text
                }
                None => {
                    warn!("chat completion has no message content");
                    PROVIDER_FAILURE.to_string()
                }
            }
        }
        Ok(_) | Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
