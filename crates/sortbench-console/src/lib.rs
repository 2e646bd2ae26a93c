//! Colorful console output for benchmark sweeps.
//!
//! Provides a custom `tracing` layer that formats sweep events with colors.
//! Output goes to stderr so that reports written to stdout stay clean.
//!
//! ## Log Levels
//!
//! - **INFO**: Sweep start/end
//! - **DEBUG**: One line per completed size
//! - **TRACE**: Individual trials

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "sortbench_benchmark=info";

/// Initializes console output with [`DEFAULT_FILTER`].
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes console output with `default_filter` as the fallback
/// directive set.
///
/// Invalid directives are ignored.
pub fn init_with_filter(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats sweep events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("sortbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    algorithm: Option<String>,
    max_size: Option<u64>,
    repetitions: Option<u64>,
    lower_bound: Option<i64>,
    upper_bound: Option<i64>,
    size: Option<u64>,
    sizes: Option<u64>,
    repetition: Option<u64>,
    elapsed_ns: Option<u64>,
    duration_ms: Option<u64>,
    time_us: Option<f64>,
    operations: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "algorithm" => self.algorithm = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "max_size" => self.max_size = Some(value),
            "repetitions" => self.repetitions = Some(value),
            "size" => self.size = Some(value),
            "sizes" => self.sizes = Some(value),
            "repetition" => self.repetition = Some(value),
            "elapsed_ns" => self.elapsed_ns = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "operations" => self.operations = Some(value as f64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "lower_bound" => self.lower_bound = Some(value),
            "upper_bound" => self.upper_bound = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "time_us" => self.time_us = Some(value),
            "operations" => self.operations = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        "size_done" => format_size_done(v),
        "trial" => format_trial(v, level),
        _ if level <= Level::WARN => format_warning(v, level),
        _ => String::new(),
    }
}

fn format_sweep_start(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let max_size = v.max_size.unwrap_or(0);
    let repetitions = v.repetitions.unwrap_or(0);

    let mut output = format!(
        "{} Benchmarking {} │ sizes 1..{} │ {} trials/size",
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        max_size.to_formatted_string(&Locale::en).bright_yellow(),
        repetitions.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let (Some(lower), Some(upper)) = (v.lower_bound, v.upper_bound) {
        output.push_str(&format!(
            " │ values [{}, {})",
            lower.to_formatted_string(&Locale::en),
            upper.to_formatted_string(&Locale::en)
        ));
    }

    output
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let sizes = v.sizes.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} complete │ {} sizes │ {}",
        "■".bright_cyan().bold(),
        algorithm.white().bold(),
        sizes.to_formatted_string(&Locale::en).white(),
        format_duration_ms(duration).yellow(),
    )
}

fn format_size_done(v: &EventVisitor) -> String {
    let size = v.size.unwrap_or(0);
    let time_us = v.time_us.unwrap_or(0.0);
    let operations = v.operations.unwrap_or(0.0);

    format!(
        "{} size {:>6} │ {:>12} │ {:>14} ops",
        "⚡".bright_cyan(),
        size.to_formatted_string(&Locale::en).white(),
        format_micros(time_us).bright_magenta(),
        format_count(operations).bright_yellow(),
    )
}

fn format_trial(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let size = v.size.unwrap_or(0);
    let repetition = v.repetition.unwrap_or(0);
    let elapsed_ns = v.elapsed_ns.unwrap_or(0);
    let operations = v.operations.unwrap_or(0.0);

    format!(
        "  · size {:>6} │ trial {:>4} │ {:>12} │ {:>14} ops",
        size.to_formatted_string(&Locale::en),
        repetition + 1,
        format_micros(elapsed_ns as f64 / 1_000.0),
        format_count(operations),
    )
    .bright_black()
    .to_string()
}

fn format_warning(v: &EventVisitor, level: Level) -> String {
    let message = v.message.as_deref().unwrap_or("");
    let icon = if level == Level::ERROR { "✗" } else { "!" };
    format!("{} {}", icon.bright_red().bold(), message.bright_red())
}

fn format_micros(us: f64) -> String {
    if us < 1_000.0 {
        format!("{:.2}µs", us)
    } else if us < 1_000_000.0 {
        format!("{:.2}ms", us / 1_000.0)
    } else {
        format!("{:.2}s", us / 1_000_000.0)
    }
}

fn format_count(count: f64) -> String {
    if count.fract() == 0.0 && count >= 0.0 && count < u64::MAX as f64 {
        (count as u64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.2}", count)
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
