//! Line-oriented terminal I/O for the menu and subcommands.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use console::Term;

/// Abstraction over terminal I/O for testability.
pub trait MenuIo {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line of input.
    ///
    /// Returns `None` at end of input. The trailing line break is removed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write several lines.
    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        lines.iter().try_for_each(|line| self.write_line(line))
    }
}

/// Real terminal I/O: output through `console`, input from stdin.
#[derive(Debug)]
pub struct TermIo {
    term: Term,
}

impl TermIo {
    pub fn new() -> Self {
        TermIo {
            term: Term::stdout(),
        }
    }
}

impl Default for TermIo {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuIo for TermIo {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Scripted I/O for tests: canned input lines and a captured transcript.
///
/// Prompts are recorded in the transcript as their own lines.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedIo {
    /// Create a script that answers prompts with `input` in order, then EOF.
    pub fn new(input: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ScriptedIo {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, one entry per line.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The output joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl MenuIo for ScriptedIo {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}
