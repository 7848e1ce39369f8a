#![deny(unsafe_code)]

mod display;
mod keys;

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::time::Instant;

use clap::ArgAction::{Set, SetTrue};
use clap::Parser;
use tracing::{event, span, Level};
use tracing_subscriber::prelude::*;

use calc::{Calculator, Context, Outcome};
use display::{ColourOption, Screen};
use keys::{parse_line, Key, UnknownToken};

/// Reverse-Polish calculator
///
/// Keys are separated by whitespace.  Numbers are typed into the
/// entry line; `push` (or `enter`) moves the entry onto the stack,
/// and the operators + - * / pow sqrt act on the stack.  Other keys
/// are neg, del, pop, swap, and < and > to move the cursor.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Keys to press before reading any further input.
    #[clap(num_args = 0..)]
    keys: Vec<String>,

    /// Read keys from this file instead of the standard input.
    #[clap(action = Set, long)]
    script: Option<OsString>,

    /// When to use colour in the output.
    #[clap(value_enum, long, default_value_t = ColourOption::Auto)]
    color: ColourOption,

    /// Print the state as JSON instead of drawing it.
    #[clap(action = SetTrue, long)]
    json: bool,

    /// Only print the state once all input has been read.
    #[clap(action = SetTrue, long)]
    quiet: bool,
}

#[derive(Debug)]
enum Fail {
    /// We were not able to correctly initialise the calculator.
    InitialisationFailure(String),
    /// Reading input or writing output failed.
    Io(io::Error),
    /// A key we don't know how to press.  Line 0 means the command
    /// line.
    BadInput { line: usize, token: UnknownToken },
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
            Fail::Io(e) => write!(f, "I/O error: {e}"),
            Fail::BadInput { line: 0, token } => write!(f, "{token}"),
            Fail::BadInput { line, token } => write!(f, "line {line}: {token}"),
        }
    }
}

impl Error for Fail {}

impl From<io::Error> for Fail {
    fn from(e: io::Error) -> Fail {
        Fail::Io(e)
    }
}

struct Session {
    calc: Calculator,
    screen: Screen,
    started: Instant,
}

impl Session {
    fn context(&self) -> Context {
        Context::new(self.started.elapsed())
    }

    fn press(&mut self, key: Key) {
        let ctx = self.context();
        let outcome = match key {
            Key::Command(command) => {
                let outcome = self.calc.execute(&ctx, command);
                if let Outcome::Rejected(why) = outcome {
                    self.screen.report_rejection(command, why);
                }
                outcome
            }
            Key::CursorLeft => {
                let pos = self.calc.entry().cursor().saturating_sub(1);
                self.calc.place_cursor(pos)
            }
            Key::CursorRight => {
                let pos = self.calc.entry().cursor() + 1;
                self.calc.place_cursor(pos)
            }
        };
        event!(Level::TRACE, "{key:?} -> {outcome:?}");
    }

    /// Presses the keys on one line of input.  Returns `true` if
    /// anything was pressed.
    fn run_line(&mut self, line_number: usize, line: &str) -> Result<bool, Fail> {
        let keys = parse_line(line).map_err(|token| Fail::BadInput {
            line: line_number,
            token,
        })?;
        for key in &keys {
            self.press(*key);
        }
        Ok(!keys.is_empty())
    }

    fn run_input<R: BufRead>(&mut self, input: R, quiet: bool, forgiving: bool) -> Result<(), Fail> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match self.run_line(index + 1, &line) {
                Ok(true) if !quiet => self.screen.render(&self.calc)?,
                Ok(_) => (),
                Err(Fail::BadInput { token, .. }) if forgiving => {
                    // Someone is typing at us; let them try again.
                    event!(Level::WARN, "{token}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

fn run_calculator() -> Result<(), Fail> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let span = span!(Level::ERROR, "rpncalc", script=?cli.script);
    let _enter = span.enter();

    let mut session = Session {
        calc: Calculator::new(),
        screen: Screen::new(cli.color, cli.json),
        started: Instant::now(),
    };

    let reads_input = cli.script.is_some() || cli.keys.is_empty();
    let initial = cli.keys.join(" ");
    session.run_line(0, &initial)?;

    let result = match &cli.script {
        Some(path) => {
            event!(Level::DEBUG, "reading keys from {path:?}");
            let file = File::open(path).map_err(|e| {
                Fail::InitialisationFailure(format!("cannot open {}: {e}", path.to_string_lossy()))
            })?;
            session.run_input(BufReader::new(file), cli.quiet, false)
        }
        None if cli.keys.is_empty() => {
            let interactive = atty::is(atty::Stream::Stdin);
            if interactive && !cli.quiet {
                session.screen.render(&session.calc)?;
            }
            session.run_input(io::stdin().lock(), cli.quiet, interactive)
        }
        None => Ok(()),
    };
    if result.is_ok() && (cli.quiet || !reads_input) {
        session.screen.render(&session.calc)?;
    }
    session.screen.disconnect();
    result
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
