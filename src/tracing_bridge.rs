//! src/tracing_bridge.rs
//! Bridge between the `tracing` crate and the global logger.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events through [`Logger::global`], so applications already instrumented
//! with the standard tracing macros get leveled, timestamped lines on the
//! logger's sinks without touching their call sites.
//!
//! # Usage
//!
//! ```rust,ignore
//! yellog::init_tracing();
//!
//! // Now standard tracing macros flow through the global logger.
//! tracing::info!("listening on {}", addr);
//! tracing::warn!("slow response from {}", peer);
//! ```

use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that routes events through the global logger.
///
/// Events are filtered with the logger's configured priority after their
/// tracing level is mapped onto [`Level`]; `tracing` has no critical level,
/// so [`Level::Critical`] records can only originate from this crate's own
/// macros.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalLoggerLayer;

impl GlobalLoggerLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a tracing level onto the logger's severity scale.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Trace,
        }
    }
}

impl<S> Layer<S> for GlobalLoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());
        if level < Logger::global().priority() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            Logger::global().log(level, format_args!("{message}"));
        }
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`GlobalLoggerLayer`] as the default tracing subscriber.
///
/// After this call the standard tracing macros emit through the global
/// logger, subject to its priority and sink configuration.
///
/// # Panics
///
/// Panics if a global tracing subscriber is already installed.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(GlobalLoggerLayer::new())
        .init();
}
