//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::GrowBankResult;

/// Reads trimmed answers from `input`, writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    pub fn say(&mut self, line: impl AsRef<str>) -> GrowBankResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> GrowBankResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Ask a question. Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> GrowBankResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a boxed section heading
    pub fn heading(&mut self, title: &str) -> GrowBankResult<()> {
        self.blank()?;
        self.say(title)?;
        self.say("=".repeat(title.chars().count()))?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut prompter = Prompter::new("  hello \n".as_bytes(), Vec::new());
        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(prompter.ask("> ").unwrap(), None);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "> > \n");
    }

    #[test]
    fn test_heading_underlines_title() {
        let mut prompter = Prompter::new(&b""[..], Vec::new());
        prompter.heading("Step 1").unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "\nStep 1\n======\n");
    }
}
