use crate::error::{ShellError, ShellResult};
use std::env;
use std::path::Path;
use tracing::debug;

/// Change the process-wide working directory to the first operand.
///
/// Both a missing operand and a failing `chdir` are fatal to the shell.
pub fn cd(args: &[String]) -> ShellResult<i32> {
    let Some(target) = args.first() else {
        return Err(ShellError::CdMissingOperand);
    };

    let path = Path::new(target);
    env::set_current_dir(path).map_err(|source| ShellError::CdFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "changed working directory");
    Ok(0)
}
