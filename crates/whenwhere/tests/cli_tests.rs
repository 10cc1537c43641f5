use std::io::Write;

use whenwhere::cli::{load_registry, parse_args, run, CliError, Command, Invocation};
use whenwhere::ZoneRegistry;

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

fn run_to_string(command: &Command, registry: &ZoneRegistry) -> Result<String, CliError> {
    let mut out = Vec::new();
    run(command, registry, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn small_registry() -> ZoneRegistry {
    ZoneRegistry::new(["UTC", "Asia/Tokyo", "Europe/Paris"]).unwrap()
}

#[test]
fn parse_encode() {
    let parsed = parse_args(args(
        "--registry zones.toml encode --when 2021-03-01T12:00:00Z --zone UTC --zone Asia/Tokyo",
    ))
    .unwrap();
    let Invocation { registry, command } = parsed;
    assert_eq!(registry.as_deref(), Some(std::path::Path::new("zones.toml")));
    match command {
        Command::Encode { when, zones, local } => {
            assert_eq!(when.unwrap().timestamp_millis(), 1_614_600_000_000);
            assert_eq!(zones, ["UTC", "Asia/Tokyo"]);
            assert!(!local);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn parse_errors_are_usage_errors() {
    for line in [
        "",
        "--registry",
        "frobnicate",
        "encode --when",
        "encode --when tomorrow",
        "encode --bogus",
        "decode",
        "decode a b",
        "zones extra",
    ] {
        let err = parse_args(args(line)).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)), "line={line:?}");
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn encode_then_decode() {
    let registry = small_registry();
    let encode = parse_args(args(
        "encode --when 2021-03-01T12:00:00.250Z --zone Europe/Paris --zone UTC",
    ))
    .unwrap()
    .command;
    let token = run_to_string(&encode, &registry).unwrap();
    let token = token.trim();

    let decode = parse_args(vec!["decode".to_string(), format!("?{token}")])
        .unwrap()
        .command;
    assert_eq!(
        run_to_string(&decode, &registry).unwrap(),
        "2021-03-01T12:00:00.250Z\nEurope/Paris\nUTC\n"
    );
}

#[test]
fn encode_unknown_zone_fails() {
    let registry = small_registry();
    let command = parse_args(args("encode --zone Mars/Base")).unwrap().command;
    let err = run_to_string(&command, &registry).unwrap_err();
    assert!(matches!(err, CliError::Codec(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn inspect_reports_layout() {
    let registry = small_registry();
    let command = parse_args(args("inspect AAABd-2o0gAAKg==")).unwrap().command;
    assert_eq!(
        run_to_string(&command, &registry).unwrap(),
        "version\tlegacy\nbytes\t10\nzones\t1\n"
    );
    let command = parse_args(args("inspect AUJ3ftqNIAAAACo")).unwrap().command;
    assert_eq!(
        run_to_string(&command, &registry).unwrap(),
        "version\tv1\nbytes\t11\nzones\t1\n"
    );
}

#[test]
fn zones_lists_indices() {
    let registry = small_registry();
    assert_eq!(
        run_to_string(&Command::Zones, &registry).unwrap(),
        "0\tUTC\n1\tAsia/Tokyo\n2\tEurope/Paris\n"
    );
}

#[test]
fn registry_file_takes_precedence_over_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "zones = [\"UTC\", \"Asia/Tokyo\"]").unwrap();
    let missing = std::path::Path::new("/nonexistent/whenwhere-registry.toml");

    let registry = load_registry(Some(file.path()), Some(missing)).unwrap();
    assert_eq!(registry.len(), 2);

    let registry = load_registry(None, Some(file.path())).unwrap();
    assert_eq!(registry.name_at(1), Some("Asia/Tokyo"));

    let err = load_registry(None, Some(missing)).unwrap_err();
    assert!(matches!(err, CliError::Registry(_)));

    assert_eq!(load_registry(None, None).unwrap(), ZoneRegistry::iana());
}
