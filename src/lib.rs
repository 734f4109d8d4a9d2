//! A line-oriented shell that chains commands with `;` and `&&`.
//!
//! A line is split into words, grouped into sub-commands at each operator and
//! run in order: builtins in-process, everything else as a child process.
//! `;` fires and forgets, `&&` waits and abandons the rest of the line when
//! the command fails.

pub mod cmd;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod process;

pub use error::{ShellError, ShellResult};
