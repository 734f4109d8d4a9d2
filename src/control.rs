//! Interactive and batch read loops.

use crate::control_state::{ControlFlow, ControlState};
use crate::error::{ShellError, ShellResult};
use crate::process::exit::QUIT_COMMAND;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

/// The line-reading surface of the interactive loop.
///
/// Implemented for rustyline's editor; tests drive the loop with a scripted
/// implementation instead of a terminal.
pub trait LineEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

impl LineEditor for DefaultEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        DefaultEditor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        DefaultEditor::add_history_entry(self, entry)
    }
}

/// Run the shell against the terminal until the user quits.
pub fn interactive_mode(state: &mut ControlState) -> ShellResult<()> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();
    run_loop_with_editor(state, &mut editor, &mut stdout)
}

/// Prompt, read and execute lines from `editor` until the session ends.
///
/// Ctrl-C drops the current line; end of input behaves like typing `quit`.
pub fn run_loop_with_editor<E, W>(
    state: &mut ControlState,
    editor: &mut E,
    out: &mut W,
) -> ShellResult<()>
where
    E: LineEditor + ?Sized,
    W: Write,
{
    info!("interactive session started");

    loop {
        let prompt = state.prompt();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                writeln!(out, "^C")?;
                continue;
            }
            Err(ReadlineError::Eof) => {
                state.handle_line(QUIT_COMMAND, out)?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let flow = state.handle_line(&line, out)?;
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(&line);
        }

        if flow == ControlFlow::Exit {
            return Ok(());
        }
    }
}

/// Yields the lines of a batch file, then an implicit `quit` once it runs dry.
pub struct BatchReader<R> {
    reader: R,
}

impl<R: BufRead> BatchReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn next_line(&mut self) -> ShellResult<String> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(QUIT_COMMAND.to_string());
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

/// Execute every line of the batch file at `path`.
pub fn batch_mode(state: &mut ControlState, path: &Path) -> ShellResult<()> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "{}Executing commands in file '{}' line by line",
        state.prompt(),
        path.display()
    )?;
    stdout.flush()?;

    let file = File::open(path).map_err(|source| ShellError::BatchOpen {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "batch session started");
    run_batch(state, BufReader::new(file), &mut stdout)
}

/// Feed lines from `reader` to the session until it asks to stop.
pub fn run_batch<R, W>(state: &mut ControlState, reader: R, out: &mut W) -> ShellResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = BatchReader::new(reader);

    loop {
        writeln!(out)?;
        let line = lines.next_line()?;
        if state.handle_line(&line, out)? == ControlFlow::Exit {
            return Ok(());
        }
    }
}
