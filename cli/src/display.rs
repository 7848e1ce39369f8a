//! Rendering of the calculator state on a terminal.
//!
//! The stack is printed bottom first, right-aligned, with the entry
//! line underneath.  The cursor is shown as `|` within the entry.
use std::io::Write;

use termcolor::{self, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};

use base::prelude::*;
use calc::{Calculator, Command};

const WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ColourOption {
    Auto,
    Always,
    Never,
}

fn get_colour_choice(option: ColourOption) -> ColorChoice {
    match option {
        ColourOption::Always => ColorChoice::Always,
        ColourOption::Never => ColorChoice::Never,
        ColourOption::Auto => {
            if atty::is(atty::Stream::Stdout) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Formats the entry text with the cursor marked.
pub(crate) fn entry_with_cursor(text: &str, cursor: usize, negative: bool) -> String {
    let (before, after) = text.split_at(cursor.min(text.len()));
    let sign = if negative { "-" } else { "" };
    format!("{sign}{before}|{after}")
}

pub(crate) struct Screen {
    stream: StandardStream,
    json: bool,
}

impl Screen {
    pub(crate) fn new(colour: ColourOption, json: bool) -> Screen {
        Screen {
            stream: StandardStream::stdout(get_colour_choice(colour)),
            json,
        }
    }

    fn set_colour(&mut self, colour: Option<termcolor::Color>) {
        let mut spec = ColorSpec::new();
        spec.set_fg(colour);
        if let Err(e) = self.stream.set_color(&spec) {
            event!(Level::ERROR, "Failed to select colour {:?}: {}", spec, e);
        }
    }

    fn write_value(&mut self, n: FixedPoint) -> Result<(), std::io::Error> {
        let colour = match n.value() {
            Value::Finite(_) => None,
            Value::PositiveInfinity | Value::NegativeInfinity => Some(termcolor::Color::Red),
        };
        self.set_colour(colour);
        writeln!(self.stream, "{:>width$}", n.to_string(), width = WIDTH)?;
        self.set_colour(None);
        Ok(())
    }

    pub(crate) fn render(&mut self, calc: &Calculator) -> Result<(), std::io::Error> {
        if self.json {
            let snapshot = calc.snapshot();
            let text = serde_json::to_string(&snapshot).map_err(std::io::Error::other)?;
            writeln!(self.stream, "{text}")?;
            return self.stream.flush();
        }

        for n in calc.stack().values() {
            self.write_value(*n)?;
        }
        writeln!(self.stream, "{}", "-".repeat(WIDTH))?;
        let entry = calc.entry();
        let line = entry_with_cursor(entry.text(), entry.cursor(), entry.is_negative());
        self.set_colour(Some(termcolor::Color::Cyan));
        writeln!(self.stream, "{line:>width$}", width = WIDTH)?;
        self.set_colour(None);
        self.stream.flush()
    }

    pub(crate) fn report_rejection(&mut self, command: Command, why: RootError) {
        if self.json {
            // The calculator has already logged it, and a note here
            // would corrupt the JSON stream.
            return;
        }
        self.set_colour(Some(termcolor::Color::Yellow));
        if let Err(e) = writeln!(self.stream, "{command}: {why}") {
            event!(Level::ERROR, "Failed to write to terminal: {}", e);
        }
        self.set_colour(None);
    }

    pub(crate) fn disconnect(&mut self) {
        if let Err(e) = self.stream.reset() {
            event!(Level::ERROR, "Failed to reset terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::entry_with_cursor;

    #[test]
    fn test_entry_with_cursor() {
        assert_eq!(entry_with_cursor("", 0, false), "|");
        assert_eq!(entry_with_cursor("125", 1, false), "1|25");
        assert_eq!(entry_with_cursor("2.5", 3, true), "-2.5|");
    }
}
