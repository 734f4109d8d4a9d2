use crate::error::ShellResult;
use std::io::Write;

/// Word that ends the session when it appears in command position.
pub const QUIT_COMMAND: &str = "quit";

pub fn is_quit(name: &str) -> bool {
    name == QUIT_COMMAND
}

/// Say goodbye before the session loop shuts down.
pub fn farewell(out: &mut dyn Write) -> ShellResult<()> {
    writeln!(out, "You are exiting this shell...")?;
    writeln!(out, "Thanks for using! Goodbye!!!")?;
    Ok(())
}
