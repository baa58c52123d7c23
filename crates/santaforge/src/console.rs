//! Console output for generation runs.
//!
//! Provides a custom `tracing` layer that prints one line per generation
//! event. Enabled with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the console subscriber.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, defaulting to `santaforge=info`. If the application already
/// installed a global subscriber, that subscriber is left in place and this
/// layer is not attached.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("santaforge=info,santaforge_solver=warn"));

        // Err only when another global subscriber is already set.
        tracing_subscriber::registry()
            .with(filter)
            .with(GenerationConsoleLayer)
            .try_init()
            .ok();
    });
}

/// A tracing layer that formats SantaForge events.
pub struct GenerationConsoleLayer;

impl<S: Subscriber> Layer<S> for GenerationConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("santaforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let line = format_event(*metadata.level(), &visitor);
        if !line.is_empty() {
            let _ = writeln!(io::stdout().lock(), "{line}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    participant_count: Option<u64>,
    restriction_count: Option<u64>,
    seed: Option<u64>,
    cycles: Option<u64>,
    duration_us: Option<u64>,
    matched: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "participant_count" => self.participant_count = Some(value),
            "restriction_count" => self.restriction_count = Some(value),
            "seed" => self.seed = Some(value),
            "cycles" => self.cycles = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "matched" => self.matched = Some(value),
            _ => {}
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    let n = v.participant_count.unwrap_or(0);
    match v.event.as_deref() {
        Some("generation_start") => format!(
            "[santaforge] generating for {n} participants, {} restrictions (seed {})",
            v.restriction_count.unwrap_or(0),
            v.seed.unwrap_or(0),
        ),
        Some("generation_end") => format!(
            "[santaforge] assigned {n} participants in {} cycle(s), {}us",
            v.cycles.unwrap_or(0),
            v.duration_us.unwrap_or(0),
        ),
        Some("matching_end") => format!(
            "[santaforge] matched {}/{n}",
            v.matched.unwrap_or(0),
        ),
        _ if level <= Level::WARN => format!(
            "[santaforge] {level}: {}",
            v.message.as_deref().unwrap_or("")
        ),
        _ => String::new(),
    }
}
