pub mod chat;
pub mod errors;
pub mod fallback;
pub mod id;

pub use chat::{ChatMessage, ChatRole, Transcript};
pub use errors::{AthenaError, ConfigError};
pub use id::{new_id, SessionId};

pub type Result<T> = std::result::Result<T, AthenaError>;
