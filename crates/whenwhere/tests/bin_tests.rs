use std::io::Write;
use std::process::{Command, Output};

fn whenwhere(args: &[&str], registry_env: Option<&std::path::Path>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_whenwhere"));
    command.args(args).env_remove("WHENWHERE_REGISTRY");
    if let Some(path) = registry_env {
        command.env("WHENWHERE_REGISTRY", path);
    }
    command.output().expect("whenwhere binary runs")
}

fn registry_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "zones = [\"UTC\", \"Asia/Tokyo\"]").unwrap();
    file
}

#[test]
fn registry_comes_from_the_environment() {
    let file = registry_file();
    let output = whenwhere(&["zones"], Some(file.path()));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0\tUTC\n1\tAsia/Tokyo\n");
}

#[test]
fn registry_flag_overrides_the_environment() {
    let file = registry_file();
    let missing = std::path::Path::new("/nonexistent/whenwhere-registry.toml");
    let path = file.path().to_str().unwrap();
    let output = whenwhere(&["--registry", path, "zones"], Some(missing));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);

    let output = whenwhere(&["zones"], Some(missing));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn encode_and_decode_through_the_binary() {
    let file = registry_file();
    let output = whenwhere(
        &["encode", "--when", "2021-03-01T12:00:00Z", "--zone", "Asia/Tokyo"],
        Some(file.path()),
    );
    assert_eq!(output.status.code(), Some(0));
    let token = String::from_utf8(output.stdout).unwrap();

    let output = whenwhere(&["decode", token.trim()], Some(file.path()));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "2021-03-01T12:00:00.000Z\nAsia/Tokyo\n"
    );
}

#[test]
fn exit_status_by_error_kind() {
    let usage = whenwhere(&["frobnicate"], None);
    assert_eq!(usage.status.code(), Some(2));
    assert!(String::from_utf8(usage.stderr).unwrap().contains("usage: whenwhere"));

    let codec = whenwhere(&["decode", "?%%%"], None);
    assert_eq!(codec.status.code(), Some(1));
    assert!(codec.stdout.is_empty());
}
