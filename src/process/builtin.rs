//! The fixed set of commands implemented inside the shell process.

use crate::error::ShellResult;
use crate::process::{cd, help};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
}

/// Registered builtins, in the order `help` lists them.
pub const BUILTINS: [Builtin; 2] = [Builtin::Cd, Builtin::Help];

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
        }
    }

    /// Exact, case-sensitive lookup by command name.
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Run the builtin with the arguments that follow its name.
    ///
    /// Returns the command's status (0 on success). Failures that must end the
    /// program come back as `Err`.
    pub fn call(self, args: &[String], out: &mut dyn Write) -> ShellResult<i32> {
        match self {
            Builtin::Cd => cd::cd(args),
            Builtin::Help => help::help(out),
        }
    }
}

pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.into_iter().map(Builtin::name)
}
