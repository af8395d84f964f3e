//! Conversation session lifecycle.
//!
//! [`SessionManager`] owns the single provider session slot and recreates
//! it lazily; [`MessageRelay`] is the per-message entry point that never
//! surfaces an error to its caller.

mod manager;
mod relay;
mod state;


pub use manager::{SessionError, SessionManager};
pub use relay::{Fallbacks, MessageRelay, RelayError};
pub use state::{ActiveSession, SessionStatus};
