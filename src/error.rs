use rustyline::error::ReadlineError;
use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end the whole program, not just the current line.
///
/// Chain-local failures never show up here; they are reported inline and
/// turned into [`ExitSignal::StopChain`](crate::process::ExitSignal::StopChain).
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Can't read more than {limit} characters at one line...")]
    LineTooLong { limit: usize },
    #[error("Can't allocate memory for tokens...")]
    Allocation(#[from] TryReserveError),
    #[error("Expected argument to \"cd\"...")]
    CdMissingOperand,
    #[error("Error using cd command: {}: {source}", .path.display())]
    CdFailed { path: PathBuf, source: io::Error },
    #[error("Error forking... ({command}: {source})")]
    Spawn { command: String, source: io::Error },
    #[error("Error in waiting pid... ({command}: {source})")]
    Wait { command: String, source: io::Error },
    #[error("Can't open batchfile {}...", .path.display())]
    BatchOpen { path: PathBuf, source: io::Error },
    #[error("terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
