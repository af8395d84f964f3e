//! Chat widget state: transcript, input gating and the busy indicator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use athena_ai::MessageRelay;
use athena_common::{ChatMessage, Transcript};
use tracing::debug;

/// Shown while a reply is outstanding.
pub const LOADING_TEXT: &str = "Consulting regulations...";

/// Outcome of submitting one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing was sent.
    Ignored,
    /// Another message is still outstanding; nothing was sent.
    Busy,
    /// The reply (or fallback) appended to the transcript.
    Replied(String),
}

/// Clears the `busy` flag on drop, even if the send future is cancelled.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// The chat front end's model: owns the transcript and allows one
/// outstanding send at a time.
pub struct ChatWidget {
    relay: Arc<MessageRelay>,
    transcript: Mutex<Transcript>,
    busy: AtomicBool,
}

impl ChatWidget {
    pub fn new(relay: Arc<MessageRelay>, greeting: impl Into<String>) -> Self {
        Self {
            relay,
            transcript: Mutex::new(Transcript::with_greeting(greeting)),
            busy: AtomicBool::new(false),
        }
    }

    /// Open the provider session in the background of startup. Failure is
    /// only logged; the first message retries.
    pub async fn open(&self) {
        if let Err(e) = self.relay.warm_up().await {
            debug!(error = %e, "Chat warm-up failed, will retry on first message");
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.lock_transcript().clone()
    }

    /// Submit one line of user input.
    pub async fn submit(&self, input: &str) -> Submission {
        if input.trim().is_empty() {
            return Submission::Ignored;
        }
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return Submission::Busy;
        };

        self.lock_transcript().push(ChatMessage::user(input));
        let reply = self.relay.send(input).await;
        self.lock_transcript().push(ChatMessage::model(reply.clone()));

        Submission::Replied(reply)
    }

    /// Start a new conversation with the provider. The transcript is kept.
    pub async fn reset_session(&self) {
        self.relay.reset().await;
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        // A poisoned transcript is still a valid list of messages.
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
