use chainsh::process::builtin::{BUILTINS, Builtin, names};
use chainsh::process::help::help;

fn help_text() -> String {
    let mut out = Vec::new();
    assert_eq!(help(&mut out).unwrap(), 0);
    String::from_utf8(out).unwrap()
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert_eq!(Builtin::lookup("cd"), Some(Builtin::Cd));
    assert_eq!(Builtin::lookup("help"), Some(Builtin::Help));
    assert_eq!(Builtin::lookup("CD"), None);
    assert_eq!(Builtin::lookup("help "), None);
    assert_eq!(Builtin::lookup("quit"), None);
    assert_eq!(Builtin::lookup("ls"), None);
}

#[test]
fn registry_names_are_unique_and_ordered() {
    let listed: Vec<&str> = names().collect();
    assert_eq!(listed, vec!["cd", "help"]);
    for builtin in BUILTINS {
        assert_eq!(Builtin::lookup(builtin.name()), Some(builtin));
    }
}

#[test]
fn help_lists_every_builtin_and_quit() {
    let text = help_text();
    let listing = text
        .lines()
        .skip_while(|line| !line.starts_with("The following are builtin"))
        .nth(1)
        .expect("builtin listing line");

    let listed: Vec<&str> = listing.split_whitespace().collect();
    assert_eq!(listed, names().collect::<Vec<_>>());
    assert!(text.contains("To exit this shell type 'quit'"));
}

#[test]
fn help_output_does_not_depend_on_history() {
    let first = help_text();
    let mut out = Vec::new();
    Builtin::Help
        .call(&["ignored".to_string(), "args".to_string()], &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), first);
    assert_eq!(help_text(), first);
}
