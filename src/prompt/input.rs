//! Line-oriented interactive input.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};

/// Reads answers from `reader` after writing prompts to `writer`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `prompt` and read one line, without its line terminator.
    ///
    /// Returns an error when the input is closed.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::Input(format!(
                "input closed while waiting for: {}",
                prompt.trim()
            )));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer, reporting each rejection.
    pub fn ask_valid<T, E, F>(&mut self, prompt: &str, mut parse: F) -> Result<T>
    where
        E: std::fmt::Display,
        F: FnMut(&str) -> std::result::Result<T, E>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Ask a yes/no question. Only an answer starting with "y" counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().to_lowercase().starts_with('y'))
    }

    /// Write a line to the prompt output.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Consume the prompter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_terminator() {
        let mut p = prompter("hello world\r\nnext\n");
        assert_eq!(p.ask("> ").unwrap(), "hello world");
        assert_eq!(p.ask("> ").unwrap(), "next");
        assert_eq!(String::from_utf8(p.into_writer()).unwrap(), "> > ");
    }

    #[test]
    fn test_ask_closed_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Name: "), Err(Error::Input(_))));
    }

    #[test]
    fn test_ask_valid_reprompts() {
        let mut p = prompter("abc\n7\n");
        let value = p
            .ask_valid("Number: ", |s| s.trim().parse::<u32>().map_err(|_| "not a number"))
            .unwrap();
        assert_eq!(value, 7);

        let output = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(output, "Number: not a number\nNumber: ");
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("y\nYes\nn\n\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }
}
