use crate::error::ShellResult;
use crate::process::builtin;
use crate::process::exit::QUIT_COMMAND;
use std::io::Write;

/// Print the usage banner. Arguments are ignored and it always succeeds.
pub fn help(out: &mut dyn Write) -> ShellResult<i32> {
    writeln!(out, "This is chainsh, a small command chaining shell.")?;
    writeln!(out, "Type commands and arguments and hit enter.")?;
    writeln!(out, "Separate commands with ';' or with '&&' to stop at the first failure.")?;
    writeln!(out, "The following are builtin:")?;
    for name in builtin::names() {
        write!(out, "{}  ", name)?;
    }
    writeln!(out)?;
    writeln!(out, "To exit this shell type '{}'", QUIT_COMMAND)?;
    Ok(0)
}
