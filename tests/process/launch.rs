use chainsh::ShellError;
use chainsh::cmd::chain::WaitPolicy;
use chainsh::process::ExitSignal;
use chainsh::process::launch::launch;

fn argv(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn launch_line(words: &[&str], policy: WaitPolicy) -> (Result<ExitSignal, ShellError>, String) {
    let mut out = Vec::new();
    let result = launch(&argv(words), policy, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[cfg(unix)]
#[test]
fn waits_for_successful_child() {
    let (result, output) = launch_line(&["true"], WaitPolicy::WaitAndRequireSuccess);
    assert_eq!(result.unwrap(), ExitSignal::Continue);
    assert!(output.is_empty());
}

#[cfg(unix)]
#[test]
fn nonzero_exit_code_stops_chain() {
    let (result, output) = launch_line(&["sh", "-c", "exit 3"], WaitPolicy::WaitAndRequireSuccess);
    assert_eq!(result.unwrap(), ExitSignal::StopChain);
    assert_eq!(output, "Arguments following 'sh' aren't executed...\n");
}

#[cfg(unix)]
#[test]
fn death_by_signal_counts_as_failure() {
    let (result, _) = launch_line(&["sh", "-c", "kill -9 $$"], WaitPolicy::WaitAndRequireSuccess);
    assert_eq!(result.unwrap(), ExitSignal::StopChain);
}

#[cfg(unix)]
#[test]
fn unwaited_failure_is_ignored() {
    let (result, output) = launch_line(&["false"], WaitPolicy::DontWait);
    assert_eq!(result.unwrap(), ExitSignal::Continue);
    assert!(output.is_empty());
}

#[test]
fn unresolvable_program_reports_invalid_argument() {
    let (result, output) = launch_line(&["nosuchcmd123", "x"], WaitPolicy::DontWait);
    assert_eq!(result.unwrap(), ExitSignal::Continue);
    assert_eq!(output, "Invalid argument 'nosuchcmd123'.\n");
}

#[test]
fn empty_argv_does_nothing() {
    let (result, output) = launch_line(&[], WaitPolicy::WaitAndRequireSuccess);
    assert_eq!(result.unwrap(), ExitSignal::Continue);
    assert!(output.is_empty());
}

/// Write an executable file with the given contents into `dir`.
#[cfg(unix)]
fn executable(dir: &std::path::Path, name: &str, contents: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_str().unwrap().to_string()
}

#[cfg(unix)]
#[test]
fn script_without_interpreter_line_fails_only_the_chain() {
    let dir = tempfile::tempdir().unwrap();
    let script = executable(dir.path(), "noshebang", "exit 3\n");

    let (result, output) = launch_line(&[script.as_str()], WaitPolicy::WaitAndRequireSuccess);
    assert_eq!(result.unwrap(), ExitSignal::StopChain);
    assert!(output.ends_with(&format!("Arguments following '{script}' aren't executed...\n")));
}

#[cfg(unix)]
#[test]
fn path_through_a_regular_file_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain");
    std::fs::write(&plain, "not a directory").unwrap();
    let through = format!("{}/sub", plain.to_str().unwrap());

    let (result, output) = launch_line(&[through.as_str()], WaitPolicy::DontWait);
    assert_eq!(result.unwrap(), ExitSignal::Continue);
    assert_eq!(output, format!("Invalid argument '{through}'.\n"));

    let (result, output) = launch_line(&[through.as_str()], WaitPolicy::WaitAndRequireSuccess);
    assert_eq!(result.unwrap(), ExitSignal::StopChain);
    assert_eq!(
        output,
        format!("Invalid argument '{through}'.\nArguments following '{through}' aren't executed...\n")
    );
}
