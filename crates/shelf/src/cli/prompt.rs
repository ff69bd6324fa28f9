//! Line-oriented prompting with validation retries.
//!
//! Every typed question goes through [`Prompter::ask`]: read a line, trim it,
//! parse it into the target type and check it against an acceptance
//! predicate. On failure the prompter prints `Error` plus the caller's hint and
//! reads again, forever. Only end of input breaks the loop, as
//! [`ShelfError::InputClosed`].

use shelfapp::error::{Result, ShelfError};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line (or several, if `text` contains newlines).
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line, trimmed. Bytes that are not UTF-8 become U+FFFD,
    /// so a garbled line fails validation instead of ending the session.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShelfError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Free-form text answer. An empty prompt asks silently.
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            self.say(prompt)?;
        }
        self.read_line()
    }

    /// Ask until the answer parses as `T` and satisfies `accept`.
    pub fn ask<T, F>(&mut self, prompt: &str, accept: F, error_message: &str) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        if !prompt.is_empty() {
            self.say(prompt)?;
        }
        loop {
            let line = self.read_line()?;
            match line.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    self.say("Error")?;
                    self.say(error_message)?;
                }
            }
        }
    }

    /// 1-based choice among `count` numbered options.
    pub fn choose(&mut self, prompt: &str, count: usize) -> Result<usize> {
        self.ask(
            prompt,
            |n: &usize| (1..=count).contains(n),
            &format!("Enter a number from 1 to {}", count),
        )
    }
}

/// Capitalize the first letter of every word and lower-case the rest.
/// A word starts after any character that is not a letter, so
/// `"f. scott fitzgerald"` becomes `"F. Scott Fitzgerald"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}
