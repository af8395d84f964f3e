//! User-facing replies substituted whenever a real model reply is unavailable.

/// No conversation session could be established.
pub const RECONNECTING: &str =
    "I'm currently reconnecting to our secure consultation server. Please try again in a moment.";

/// The provider answered but produced no usable text.
pub const EMPTY_RESPONSE: &str = "I apologize, I could not generate a response at this time.";

/// The provider round trip failed; the session was discarded.
pub const CONNECTION_ISSUE: &str =
    "We encountered a temporary connection issue. Please try sending your message again.";
