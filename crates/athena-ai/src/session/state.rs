//! Session slot state.

use athena_common::SessionId;

use crate::{ChatSession, TokenUsage};

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Absent,
    Present,
}

/// A live provider session plus bookkeeping for logs.
pub struct ActiveSession {
    pub(crate) id: SessionId,
    pub(crate) handle: Box<dyn ChatSession>,
    pub(crate) turns: u64,
    pub(crate) usage: TokenUsage,
}

impl ActiveSession {
    pub(crate) fn new(handle: Box<dyn ChatSession>) -> Self {
        Self {
            id: SessionId::new(),
            handle,
            turns: 0,
            usage: TokenUsage::default(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Completed round trips on this session.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn usage(&self) -> &TokenUsage {
        &self.usage
    }
}
