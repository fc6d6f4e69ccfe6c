//! Interactive session - prompt, read one line, answer, repeat

use std::io::{self, BufRead, Write};
use crate::Converter;

/// Printed on its own line before every read
pub const PROMPT: &str = "Enter what you want to convert (or exit): ";

/// Line that ends the session. Compared exactly, without trimming.
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// Line-oriented conversation over any reader and writer
pub struct Session<'r, R, W> {
    converter: Converter<'r>,
    input: R,
    output: W,
    state: SessionState,
}

impl<'r, R: BufRead, W: Write> Session<'r, R, W> {
    pub fn new(converter: Converter<'r>, input: R, output: W) -> Self {
        Self {
            converter,
            input,
            output,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Serve one prompt. Returns the state the session is left in.
    ///
    /// End of input is handled like the exit command.
    pub fn step(&mut self) -> io::Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        writeln!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail the grammar like any other bad line
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::info!("end of input, closing session");
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        let line = String::from_utf8_lossy(&buf);
        let line = strip_line_ending(&line);
        if line == EXIT_COMMAND {
            tracing::info!("exit requested");
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        writeln!(self.output, "{}", self.converter.answer(line))?;
        writeln!(self.output)?;
        self.output.flush()?;

        Ok(self.state)
    }

    /// Serve prompts until the session terminates
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == SessionState::AwaitingInput {}
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
