//! Translation of typed tokens into calculator key presses.
//!
//! A run of digits and decimal points types those characters into
//! the entry, so `3.25` is four key presses.  Everything else is a
//! single key, named by its keypad label or by a short alias.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use calc::{Command, Digit};

/// A key press.  Most keys are calculator commands; the cursor keys
/// stand in for clicking on the entry display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    Command(Command),
    CursorLeft,
    CursorRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnknownToken(pub(crate) String);

impl Display for UnknownToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown key '{}'", self.0)
    }
}

impl Error for UnknownToken {}

fn named_key(token: &str) -> Option<Key> {
    let command = match token {
        "<" => return Some(Key::CursorLeft),
        ">" => return Some(Key::CursorRight),
        "del" | "bs" => Command::Backspace,
        "neg" | "chs" | "+/-" | "_" => Command::ToggleSign,
        "push" | "enter" | "," => Command::Push,
        "+" | "add" => Command::Add,
        "-" | "sub" => Command::Sub,
        "*" | "x" | "mul" => Command::Mul,
        "/" | "div" => Command::Div,
        "^" | "pow" => Command::Pow,
        "sqrt" => Command::Sqrt,
        "pop" => Command::PopToEntry,
        "swap" => Command::Swap,
        _ => return None,
    };
    Some(Key::Command(command))
}

/// Converts one whitespace-free token into the keys it stands for.
pub(crate) fn parse_token(token: &str) -> Result<Vec<Key>, UnknownToken> {
    if let Some(key) = named_key(&token.to_ascii_lowercase()) {
        return Ok(vec![key]);
    }
    token
        .chars()
        .map(|ch| match ch {
            '.' => Ok(Key::Command(Command::Period)),
            _ => Digit::try_from(ch)
                .map(|d| Key::Command(Command::Digit(d)))
                .map_err(|_| UnknownToken(token.to_string())),
        })
        .collect()
}

/// Converts a line of input into keys.  Anything after a `#` is a
/// comment.
pub(crate) fn parse_line(line: &str) -> Result<Vec<Key>, UnknownToken> {
    let code = match line.split_once('#') {
        Some((code, _comment)) => code,
        None => line,
    };
    let mut keys = Vec::new();
    for token in code.split_whitespace() {
        keys.extend(parse_token(token)?);
    }
    Ok(keys)
}
