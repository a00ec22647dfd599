use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("assistant request failed: {0}")]
    Request(String),
    #[error("assistant response carried no text")]
    EmptyResponse,
}

impl AssistantError {
    /// The one generic notice surfaced inline near the assistant widget.
    /// Details stay in the logs; the operator retries manually if at all.
    pub fn user_message(&self) -> &'static str {
        "אירעה שגיאה. נסה שוב."
    }
}

/// Submit a prompt, receive text or an error. Implementations must be safe
/// to share across the session.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AssistantError>;
}
