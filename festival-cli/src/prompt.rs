//! Line input for the shell: dialoguer on a terminal, plain lines otherwise.

use std::io::{BufRead, Write};

use anyhow::Result;
use dialoguer::Input;

pub trait Prompt {
    /// Ask for one line. `None` means input has ended.
    fn ask(&mut self, label: &str, out: &mut dyn Write) -> Result<Option<String>>;
}

/// Interactive prompt with line editing.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, label: &str, out: &mut dyn Write) -> Result<Option<String>> {
        out.flush()?;
        let value = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }
}

/// Reads answers from piped or redirected input.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        LinePrompt { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, label: &str, out: &mut dyn Write) -> Result<Option<String>> {
        write!(out, "{label}: ")?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
