//! Line-oriented prompting with validation.
//!
//! A [`Prompter`] writes a label, reads one line, and either hands back a
//! value or explains the problem and asks again. It is generic over any
//! `BufRead`/`Write` pair so the menu can be driven from a terminal or from a
//! byte buffer in tests.
//!
//! End of input is never retried: both prompts return
//! [`RosterError::InputClosed`] and the caller decides what that means.

use crate::error::{Result, RosterError};
use std::io::{BufRead, Write};

/// Inclusive range an integer answer must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// The full range of a 32-bit signed integer.
    pub const UNBOUNDED: Bounds = Bounds {
        min: i32::MIN as i64,
        max: i32::MAX as i64,
    };

    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: i64) -> Self {
        Self {
            min,
            max: i32::MAX as i64,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn rejection(&self) -> String {
        if *self == Self::UNBOUNDED {
            "Invalid input! Please try again.".to_string()
        } else {
            format!(
                "Invalid input. Please enter a value between {} and {}.",
                self.min, self.max
            )
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Where prompts are written. The menu prints through this too.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for an integer until one inside `bounds` is given.
    ///
    /// Only the first whitespace-separated token on the line is read; the
    /// rest of the line is discarded. A blank line counts as invalid.
    pub fn prompt_int(&mut self, label: &str, bounds: Bounds) -> Result<i64> {
        let mut failures = 0u32;
        loop {
            let line = self.prompt_line(label)?;
            let parsed = line
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<i64>().ok());

            match parsed {
                Some(value) if bounds.contains(value) => return Ok(value),
                _ => log::debug!("rejected {:?} for {:?}", line, bounds),
            }

            writeln!(self.output, "{}", bounds.rejection())?;
            failures += 1;
            if let Some(max) = self.max_attempts {
                if failures >= max {
                    return Err(RosterError::TooManyAttempts(max));
                }
            }
        }
    }

    /// Ask for a raw line. Only the line terminator is removed.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than an error.
    pub fn prompt_line(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(RosterError::InputClosed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
