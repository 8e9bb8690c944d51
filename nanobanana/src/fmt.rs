//! Log line formatting for the terminal

use owo_colors::OwoColorize as _;
use std::fmt;
use tracing_core::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Prints `Level: message`, with the level colored and nothing else
pub struct LevelPrefixFormatter;

impl<S, N> FormatEvent<S, N> for LevelPrefixFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            write!(writer, "{} ", colored_prefix(level))?;
        } else {
            write!(writer, "{} ", prefix(level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn prefix(level: Level) -> &'static str {
    match level {
        Level::ERROR => "Error:",
        Level::WARN => "Warning:",
        Level::INFO => "Info:",
        Level::DEBUG => "Debug:",
        Level::TRACE => "Trace:",
    }
}

fn colored_prefix(level: Level) -> String {
    let text = prefix(level);
    match level {
        Level::ERROR => text.red().bold().to_string(),
        Level::WARN => text.yellow().bold().to_string(),
        Level::INFO => text.blue().bold().to_string(),
        Level::DEBUG => text.dimmed().to_string(),
        Level::TRACE => text.dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(prefix(Level::ERROR), "Error:");
        assert_eq!(prefix(Level::INFO), "Info:");
        assert!(colored_prefix(Level::WARN).contains("Warning:"));
    }
}
