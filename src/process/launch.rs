//! Spawning external programs.

use crate::cmd::chain::WaitPolicy;
use crate::error::{ShellError, ShellResult};
use crate::process::{ExitSignal, require_success};
use std::io::{self, ErrorKind, Write};
use std::process::{Child, Command, ExitStatus};
use tracing::{debug, error};

/// Spawn `argv[0]` (looked up through `PATH`) with the remaining arguments.
///
/// Under [`WaitPolicy::DontWait`] the child is left running and never reaped;
/// the call returns [`ExitSignal::Continue`] straight away. Under
/// [`WaitPolicy::WaitAndRequireSuccess`] it blocks until the child exits or is
/// killed and stops the chain unless the exit status was 0.
pub fn launch(argv: &[String], policy: WaitPolicy, out: &mut dyn Write) -> ShellResult<ExitSignal> {
    let Some((name, args)) = argv.split_first() else {
        return Ok(ExitSignal::Continue);
    };

    // Anything we printed must reach the terminal before the child writes
    out.flush()?;

    let child = match Command::new(name).args(args).spawn() {
        Ok(child) => child,
        Err(err) if !is_resource_exhaustion(&err) => {
            debug!(command = %name, error = %err, "unable to start command");
            writeln!(out, "Invalid argument '{}'.", name)?;
            return require_success(name, policy, false, out);
        }
        Err(source) => {
            error!(command = %name, error = %source, "process creation failed");
            return Err(ShellError::Spawn {
                command: name.clone(),
                source,
            });
        }
    };

    match policy {
        WaitPolicy::DontWait => {
            debug!(command = %name, pid = child.id(), "detached child");
            Ok(ExitSignal::Continue)
        }
        WaitPolicy::WaitAndRequireSuccess => {
            let status = wait_for(child, name)?;
            debug!(command = %name, %status, "child finished");
            require_success(name, policy, status.success(), out)
        }
    }
}

fn wait_for(mut child: Child, name: &str) -> ShellResult<ExitStatus> {
    child.wait().map_err(|source| ShellError::Wait {
        command: name.to_string(),
        source,
    })
}

/// Spawn errors where the OS could not create a process at all.
///
/// Everything else (missing program, bad format, unusable path) failed at the
/// exec step and only fails the sub-command.
fn is_resource_exhaustion(err: &io::Error) -> bool {
    err.kind() == ErrorKind::OutOfMemory || err.raw_os_error().is_some_and(is_exhaustion_errno)
}

#[cfg(unix)]
fn is_exhaustion_errno(code: i32) -> bool {
    matches!(code, libc::EAGAIN | libc::ENOMEM | libc::EMFILE | libc::ENFILE)
}

#[cfg(not(unix))]
fn is_exhaustion_errno(_code: i32) -> bool {
    false
}
