//! Black-box generative-text helper shown next to the finished quote.
//!
//! The quote pipeline places no structure on the content: a free-text prompt
//! goes in, free text or a single generic failure comes out. Assistant
//! failures never touch quote state and are never retried automatically.

pub mod client;
pub mod gemini;

pub use client::{AssistantClient, AssistantError};
pub use gemini::GeminiAssistant;
