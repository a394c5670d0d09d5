use std::fmt::Debug;
use std::path::Path;

use colored::*;
use scaffold_common::config::Config;
use scaffold_common::log::LogLevel;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter, Targets};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::terminal::print::PRINT_TARGET;

const LOG_FILE_NAME: &str = "app.log";

/// Console format: a colored level symbol, the emitting component, then the message.
///
/// Events from [`PRINT_TARGET`] are written raw.
pub struct ScaffoldFormatter;

#[derive(Default)]
struct EventFields {
    message: String,
    raw_msg: Option<String>,
    component: Option<String>,
    critical: bool,
    extra: Vec<String>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "component" => self.component = Some(value.to_string()),
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "critical" => self.critical = value,
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            name => self.extra.push(format!("{name}={value:?}")),
        }
    }
}

impl<S, N> FormatEvent<S, N> for ScaffoldFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            if let Some(raw) = fields.raw_msg {
                return writeln!(writer, "{raw}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            _ if fields.critical => ("[!]", |s| s.bright_red().bold().underline()),
            _ => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if let Some(component) = &fields.component {
            write!(writer, "{} ", format!("[{component}]").bright_black())?;
        }

        write!(writer, "{}", fields.message)?;

        if !fields.extra.is_empty() {
            write!(writer, " {}", fields.extra.join(" ").dimmed())?;
        }

        writeln!(writer)
    }
}

/// Console filter: `rust_log` directives when present, the configured level otherwise.
///
/// [`PRINT_TARGET`] is pinned to INFO. It carries program output, not diagnostics, so no
/// `RUST_LOG` value can hide it.
fn console_filter(level: LogLevel, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_filter().into())
        .parse_lossy(rust_log.unwrap_or_default());
    Ok(filter.add_directive(format!("{PRINT_TARGET}=info").parse()?))
}

fn console_layer<S, W>(filter: EnvFilter, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .event_format(ScaffoldFormatter)
        .with_writer(writer)
        .with_filter(filter)
}

/// Every level, no ANSI escapes, and nothing from [`PRINT_TARGET`].
fn file_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer().with_writer(writer).with_ansi(false).with_filter(
        Targets::new()
            .with_target(PRINT_TARGET, LevelFilter::OFF)
            .with_default(LevelFilter::TRACE),
    )
}

/// Daily rolling `app.log` in `dir`, created if missing.
fn log_file_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber.
///
/// The console honours `RUST_LOG` and falls back to the configured level. With a log
/// directory set, a second layer writes every event except terminal decoration, uncolored,
/// to a daily rolling file. The returned guard flushes that file on drop and must live
/// until the program exits.
pub fn init_logging(cfg: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let console = console_layer(console_filter(cfg.level, rust_log.as_deref())?, std::io::stdout);

    let (file, guard) = match &cfg.log_dir {
        Some(dir) => {
            let (writer, guard) = log_file_writer(dir)?;
            (Some(file_layer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()?;

    Ok(guard)
}
