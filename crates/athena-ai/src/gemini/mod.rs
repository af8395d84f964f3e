//! Google Gemini API client.
//!
//! Implements `ChatProvider` for Gemini models via the Generative
//! Language API. Each session keeps its own turn history and resends it
//! with every request, with the system instruction attached separately.

mod api;
mod chat;
mod client;
mod config;

pub use chat::GeminiChat;
pub use client::GeminiClient;
pub use config::{GeminiConfig, GEMINI_API_BASE};
