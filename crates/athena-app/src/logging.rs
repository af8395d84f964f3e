//! Subscriber setup with a filter that can be tightened once config is read.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Handle for changing the active log level after startup.
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    pub fn set_directive(&self, directive: &str) {
        if let Err(e) = self.0.reload(filter_for(directive)) {
            tracing::warn!("Failed to apply log level {directive}: {e}");
        }
    }
}

/// `RUST_LOG` plus `directive`; an unparsable directive means `info`.
pub fn filter_for(directive: &str) -> EnvFilter {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

/// Install the global subscriber, logging to stderr so stdout stays the chat.
pub fn init(directive: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(filter_for(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    LogHandle(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_uses_directive() {
        let filter = filter_for("debug");
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn unparsable_directive_falls_back_to_info() {
        let filter = filter_for("athena=loud");
        assert!(filter.to_string().contains("info"));
    }

    #[test]
    fn reload_handle_swaps_filter() {
        let (_filter, handle) = reload::Layer::<EnvFilter, Registry>::new(filter_for("info"));
        let logs = LogHandle(handle);
        logs.set_directive("warn");
        let current = logs.0.with_current(|f| f.to_string()).unwrap();
        assert!(current.contains("warn"));
    }
}
