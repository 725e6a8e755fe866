use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes each event with a coloured level symbol. Debug and trace events also name the
/// module they came from.
pub struct OuiFormatter;

impl<S, N> FormatEvent<S, N> for OuiFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;
        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Filter directive for a `-v` count. Dependencies stay at `warn`.
pub fn directive(verbosity: u8) -> String {
    let level: &str = match verbosity {
        0 => return String::from("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,ouilookup_cli={level},ouilookup_core={level},ouilookup_common={level}")
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries results.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .event_format(OuiFormatter)
        .with_env_filter(EnvFilter::new(directive(verbosity)))
        .with_writer(std::io::stderr)
        .try_init();
}
