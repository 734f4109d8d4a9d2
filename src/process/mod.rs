//! Builtin dispatch, external process launching and the chain executor.

pub mod builtin;
pub mod cd;
pub mod exit;
pub mod help;
pub mod launch;

use crate::cmd::chain::{Chain, Operator, SubCommand, WaitPolicy};
use crate::error::ShellResult;
use crate::process::builtin::Builtin;
use std::io::Write;
use tracing::{debug, info};

/// Outcome of running a sub-command, driving what happens to the rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    /// Move on to the next sub-command.
    Continue,
    /// A waited-on command failed; drop the rest of this line.
    StopChain,
    /// `quit` was requested; end the session after this line.
    StopSession,
}

/// Execute one tokenized line, running its sub-commands in order.
///
/// An empty token sequence ends the session. Fatal errors short-circuit the
/// rest of the line and are returned to the caller untouched.
pub fn execute(tokens: &[String], out: &mut dyn Write) -> ShellResult<ExitSignal> {
    if tokens.is_empty() {
        debug!("blank line, ending session");
        return Ok(ExitSignal::StopSession);
    }

    for sub in Chain::new(tokens) {
        let signal = dispatch(&sub, out)?;
        if signal != ExitSignal::Continue {
            return Ok(signal);
        }
    }

    Ok(ExitSignal::Continue)
}

fn dispatch(sub: &SubCommand<'_>, out: &mut dyn Write) -> ShellResult<ExitSignal> {
    if exit::is_quit(sub.name()) {
        exit::farewell(out)?;
        return Ok(ExitSignal::StopSession);
    }

    debug!(
        command = sub.name(),
        operator = sub.operator().map(Operator::token),
        policy = ?sub.policy(),
        "dispatching sub-command"
    );

    // Builtins run in-process and never spawn
    if let Some(builtin) = Builtin::lookup(sub.name()) {
        debug!(builtin = builtin.name(), "running builtin");
        let status = builtin.call(sub.args(), out)?;
        return require_success(sub.name(), sub.policy(), status == 0, out);
    }

    launch::launch(sub.argv(), sub.policy(), out)
}

/// Map a finished command's outcome onto a signal according to its wait policy.
pub(crate) fn require_success(
    name: &str,
    policy: WaitPolicy,
    succeeded: bool,
    out: &mut dyn Write,
) -> ShellResult<ExitSignal> {
    if succeeded || policy == WaitPolicy::DontWait {
        return Ok(ExitSignal::Continue);
    }

    writeln!(out, "Arguments following '{}' aren't executed...", name)?;
    info!(command = name, "command failed, abandoning rest of line");
    Ok(ExitSignal::StopChain)
}
