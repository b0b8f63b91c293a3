use clap::Parser;
use scaffold::cli::{Args, Editor};
use scaffold::parser::{Answers, NAME_KEY, TEMPLATE_KEY};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("scaffold")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.name, None);
    assert_eq!(parsed.template, None);
    assert_eq!(parsed.positional_name, None);
    assert_eq!(parsed.editor, Editor::Code);
    assert!(!parsed.stdin);
    assert!(!parsed.verbose);
    assert!(!parsed.current_dir);
    assert!(parsed.templates_dir.is_none());
}

#[test]
fn test_positional_args() {
    let parsed = Args::try_parse_from(make_args(&["my-app", "nextjs-ts-clean"])).unwrap();

    assert_eq!(parsed.positional_name.as_deref(), Some("my-app"));
    assert_eq!(parsed.positional_template.as_deref(), Some("nextjs-ts-clean"));
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.template, None);
}

#[test]
fn test_flags_and_positionals_are_kept_apart() {
    let parsed = Args::try_parse_from(make_args(&[
        "positional-name",
        "1",
        "--name",
        "flag-name",
        "-t",
        "nextjs-ts-clean",
    ]))
    .unwrap();

    assert_eq!(parsed.name.as_deref(), Some("flag-name"));
    assert_eq!(parsed.template.as_deref(), Some("nextjs-ts-clean"));
    assert_eq!(parsed.positional_name.as_deref(), Some("positional-name"));
    assert_eq!(parsed.positional_template.as_deref(), Some("1"));
}

#[test]
fn test_only_flags_bind_answers() {
    let parsed = Args::try_parse_from(make_args(&["my-app", "2"])).unwrap();
    let answers = Answers::from_args(&parsed);
    assert_eq!(answers.get(NAME_KEY), None);
    assert_eq!(answers.get(TEMPLATE_KEY), None);

    let parsed = Args::try_parse_from(make_args(&["my-app", "-n", "site", "-t", "2"])).unwrap();
    let answers = Answers::from_args(&parsed);
    assert_eq!(answers.get(NAME_KEY), Some(&serde_json::json!("site")));
    assert_eq!(answers.get(TEMPLATE_KEY), Some(&serde_json::json!("2")));
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-n", "site", "-s", "-v"])).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("site"));
    assert!(parsed.stdin);
    assert!(parsed.verbose);
}

#[test]
fn test_step_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--skip-git",
        "--skip-install",
        "--skip-dev",
        "--editor",
        "cursor",
        "--templates-dir",
        "/opt/templates",
        "--current-dir",
    ]))
    .unwrap();

    assert!(parsed.skip_git);
    assert!(parsed.skip_install);
    assert!(parsed.skip_dev);
    assert!(parsed.current_dir);
    assert_eq!(parsed.editor, Editor::Cursor);
    assert_eq!(parsed.editor.program(), Some("cursor"));
    assert_eq!(parsed.templates_dir, Some(PathBuf::from("/opt/templates")));
}

#[test]
fn test_editor_none() {
    let parsed = Args::try_parse_from(make_args(&["--editor", "none"])).unwrap();
    assert_eq!(parsed.editor.program(), None);
}

#[test]
fn test_unknown_editor_rejected() {
    assert!(Args::try_parse_from(make_args(&["--editor", "vim"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["a", "b", "c"])).is_err());
}

#[test]
fn test_missing_flag_value() {
    assert!(Args::try_parse_from(make_args(&["--name"])).is_err());
}
