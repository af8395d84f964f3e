//! Lazy creation and invalidation of the single provider session.

use std::sync::Arc;

use athena_common::SessionId;
use tracing::{debug, error, info};

use crate::credentials::CredentialSource;
use crate::{AiError, ChatProvider, SessionSpec};

use super::state::{ActiveSession, SessionStatus};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No credential is configured; retrying cannot help until it is set.
    #[error("provider credential missing ({0})")]
    Configuration(String),

    #[error("session creation failed: {0}")]
    Creation(#[source] AiError),
}

/// Owns at most one provider session.
///
/// State moves `Absent -> Present` only through [`ensure_session`] and
/// `Present -> Absent` only through [`invalidate`].
///
/// [`ensure_session`]: SessionManager::ensure_session
/// [`invalidate`]: SessionManager::invalidate
pub struct SessionManager {
    provider: Arc<dyn ChatProvider>,
    credentials: Box<dyn CredentialSource>,
    spec: SessionSpec,
    slot: Option<ActiveSession>,
}

impl SessionManager {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        credentials: Box<dyn CredentialSource>,
        spec: SessionSpec,
    ) -> Self {
        Self {
            provider,
            credentials,
            spec,
            slot: None,
        }
    }

    pub fn spec(&self) -> &SessionSpec {
        &self.spec
    }

    pub fn status(&self) -> SessionStatus {
        match self.slot {
            Some(_) => SessionStatus::Present,
            None => SessionStatus::Absent,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.slot.as_ref().map(ActiveSession::id)
    }

    /// Return the live session, creating one first if the slot is empty.
    ///
    /// On failure the slot stays empty so the next call starts over.
    pub async fn ensure_session(&mut self) -> Result<&mut ActiveSession, SessionError> {
        let active = match self.slot.take() {
            Some(active) => active,
            None => self.create().await?,
        };
        Ok(self.slot.insert(active))
    }

    async fn create(&self) -> Result<ActiveSession, SessionError> {
        let Some(credential) = self.credentials.credential() else {
            let err = SessionError::Configuration(self.credentials.describe());
            error!(error = %err, "Chat unavailable");
            return Err(err);
        };

        match self.provider.create_session(&credential, &self.spec).await {
            Ok(handle) => {
                let active = ActiveSession::new(handle);
                info!(session_id = %active.id(), model = %self.spec.model, "Chat session created");
                Ok(active)
            }
            Err(e) => {
                error!(model = %self.spec.model, error = %e, "Failed to initialize chat session");
                Err(SessionError::Creation(e))
            }
        }
    }

    /// Drop the live session, if any. Returns the id of the dropped session.
    pub fn invalidate(&mut self) -> Option<SessionId> {
        match self.slot.take() {
            Some(active) => {
                debug!(
                    session_id = %active.id(),
                    turns = active.turns(),
                    tokens = active.usage().total_tokens(),
                    "Chat session dropped"
                );
                Some(active.id)
            }
            None => None,
        }
    }
}
