//! Per-message entry point used by the chat widget.

use athena_common::fallback;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::AiError;

use super::manager::{SessionError, SessionManager};
use super::state::SessionStatus;

/// Why a relay attempt produced no model text.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("no chat session: {0}")]
    NoSession(#[from] SessionError),

    #[error("provider round trip failed: {0}")]
    RoundTrip(#[source] AiError),

    #[error("provider returned no text")]
    EmptyResponse,
}

/// User-facing replies substituted for a [`RelayError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    /// No session could be established.
    pub reconnecting: String,
    /// The round trip failed and the session was dropped.
    pub connection_issue: String,
    /// The provider answered without text.
    pub empty_response: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            reconnecting: fallback::RECONNECTING.to_string(),
            connection_issue: fallback::CONNECTION_ISSUE.to_string(),
            empty_response: fallback::EMPTY_RESPONSE.to_string(),
        }
    }
}

impl Fallbacks {
    pub fn for_error(&self, err: &RelayError) -> &str {
        match err {
            RelayError::NoSession(_) => &self.reconnecting,
            RelayError::RoundTrip(_) => &self.connection_issue,
            RelayError::EmptyResponse => &self.empty_response,
        }
    }
}

/// Forwards user messages to the current session.
///
/// All calls are serialized on one lock held across session creation,
/// the provider round trip and any invalidation, so no caller can observe
/// a session that another caller is about to drop.
pub struct MessageRelay {
    pub(super) manager: Mutex<SessionManager>,
    fallbacks: Fallbacks,
}

impl MessageRelay {
    pub fn new(manager: SessionManager) -> Self {
        Self::with_fallbacks(manager, Fallbacks::default())
    }

    pub fn with_fallbacks(manager: SessionManager, fallbacks: Fallbacks) -> Self {
        Self {
            manager: Mutex::new(manager),
            fallbacks,
        }
    }

    pub fn fallbacks(&self) -> &Fallbacks {
        &self.fallbacks
    }

    /// Send `message` and return the reply text, or one of the fallback
    /// strings. Never fails.
    ///
    /// Callers are expected to have rejected blank input already.
    pub async fn send(&self, message: &str) -> String {
        match self.try_send(message).await {
            Ok(text) => text,
            Err(e) => self.fallbacks.for_error(&e).to_string(),
        }
    }

    /// Like [`send`](Self::send) but keeps the failure kind.
    ///
    /// A failed round trip drops the session before returning, so the next
    /// call creates a fresh one. An empty reply keeps the session.
    pub async fn try_send(&self, message: &str) -> Result<String, RelayError> {
        let mut manager = self.manager.lock().await;
        let session = manager.ensure_session().await?;
        let session_id = session.id().clone();

        let outcome = session.handle.send(message).await;
        match outcome {
            Ok(reply) => {
                session.turns += 1;
                session.usage.accumulate(&reply.usage);
                debug!(
                    %session_id,
                    input_tokens = reply.usage.input_tokens,
                    output_tokens = reply.usage.output_tokens,
                    "Chat round trip complete"
                );

                match reply.text.filter(|t| !t.trim().is_empty()) {
                    Some(text) => Ok(text),
                    None => {
                        warn!(%session_id, "Provider returned no text");
                        Err(RelayError::EmptyResponse)
                    }
                }
            }
            Err(e) => {
                error!(%session_id, error = %e, "Chat API error, resetting session");
                manager.invalidate();
                Err(RelayError::RoundTrip(e))
            }
        }
    }

    /// Create the session ahead of the first message.
    pub async fn warm_up(&self) -> Result<(), SessionError> {
        let mut manager = self.manager.lock().await;
        manager.ensure_session().await.map(|_| ())
    }

    pub async fn status(&self) -> SessionStatus {
        self.manager.lock().await.status()
    }

    /// Drop the current session; the next message starts a new conversation.
    pub async fn reset(&self) {
        if let Some(id) = self.manager.lock().await.invalidate() {
            debug!(session_id = %id, "Chat session reset");
        }
    }
}
