//! State backing the session loop: configuration, prompt and line handling.

use crate::cmd::tokens::tokenize;
use crate::conf::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::process::{self, ExitSignal};
use std::io::Write;
use tracing::trace;

/// Signals whether the session loop should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading input.
    Continue,
    /// Terminate the session.
    Exit,
}

pub struct ControlState {
    config: ShellConfig,
    lines_handled: usize,
}

impl ControlState {
    /// Build a session with the compiled-in defaults.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            config,
            lines_handled: 0,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn lines_handled(&self) -> usize {
        self.lines_handled
    }

    /// The fixed interactive prompt, e.g. `chainsh> `.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.config.prompt_label)
    }

    /// Reject lines that do not fit the configured line size.
    pub fn check_line_length(&self, line: &str) -> ShellResult<()> {
        let content = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);
        if content.len() > self.config.max_line_content() {
            return Err(ShellError::LineTooLong {
                limit: self.config.line_size,
            });
        }
        Ok(())
    }

    /// Tokenize and execute one line of input.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> ShellResult<ControlFlow> {
        self.check_line_length(line)?;
        let tokens = tokenize(line)?;
        self.lines_handled += 1;
        trace!(line = self.lines_handled, ?tokens, "executing line");

        let signal = process::execute(&tokens, out)?;
        out.flush()?;

        Ok(match signal {
            ExitSignal::StopSession => ControlFlow::Exit,
            ExitSignal::Continue | ExitSignal::StopChain => ControlFlow::Continue,
        })
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
