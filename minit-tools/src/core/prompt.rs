// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Interactive line prompts with fallback defaults.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Errors which may occur while prompting for input.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Source of answers to interactive questions.
pub trait Prompt {
    /// Show `message` and read a single answer.
    ///
    /// An empty answer falls back to `default`.
    fn prompt(&mut self, message: &str, default: &str) -> Result<String, PromptError>;
}

/// Prompts on a writer and reads answers line by line from a reader.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn prompt(&mut self, message: &str, default: &str) -> Result<String, PromptError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        // End of input reads as an empty line
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str());

        if line.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(line.to_string())
        }
    }
}

/// Answers every prompt with its default, without reading input.
#[derive(Debug, Default)]
pub struct Defaults;

impl Prompt for Defaults {
    fn prompt(&mut self, message: &str, default: &str) -> Result<String, PromptError> {
        debug!(@grey, "{} {default}", message.trim_end());
        Ok(default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn returns_answer_verbatim() {
        let mut console = console("  60 \n");
        assert_eq!(console.prompt("Frame rate [30]: ", "30").unwrap(), "  60 ");
    }

    #[test]
    fn empty_answer_uses_default() {
        let mut console = console("\n\r\n");
        assert_eq!(console.prompt("a: ", "BLACK").unwrap(), "BLACK");
        assert_eq!(console.prompt("b: ", "1").unwrap(), "1");
    }

    #[test]
    fn empty_answer_without_default_is_empty() {
        let mut console = console("\n");
        assert_eq!(console.prompt("a: ", "").unwrap(), "");
    }

    #[test]
    fn end_of_input_uses_default() {
        let mut console = console("");
        assert_eq!(console.prompt("a: ", "480p").unwrap(), "480p");
    }

    #[test]
    fn writes_message_without_newline() {
        let mut console = console("x\ny\n");
        console.prompt("first: ", "").unwrap();
        console.prompt("second: ", "").unwrap();
        let (_, output) = console.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "first: second: ");
    }

    #[test]
    fn defaults_never_read() {
        assert_eq!(Defaults.prompt("Background color [BLACK]: ", "BLACK").unwrap(), "BLACK");
    }
}
