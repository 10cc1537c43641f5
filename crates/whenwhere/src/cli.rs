//! `whenwhere` — encode and decode selection tokens from the command line.
//!
//! ```text
//! whenwhere [--registry FILE] encode [--when RFC3339|now] [--zone NAME]... [--local]
//! whenwhere [--registry FILE] decode TOKEN-OR-QUERY
//! whenwhere [--registry FILE] inspect TOKEN
//! whenwhere [--registry FILE] zones
//! ```
//!
//! Without `--registry` the `WHENWHERE_REGISTRY` environment variable is
//! consulted, then the built-in IANA registry is used.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;
use whenwhere_core::{
    local_zone, parse_query, CodecError, FormatVersion, RegistryError, Selection, StateCodec,
    ZoneRegistry,
};

/// Environment variable naming a registry file.
pub const REGISTRY_ENV: &str = "WHENWHERE_REGISTRY";

pub const USAGE: &str = "\
usage: whenwhere [--registry FILE] <command>

commands:
  encode [--when RFC3339|now] [--zone NAME]... [--local]
  decode TOKEN-OR-QUERY
  inspect TOKEN
  zones";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Encode {
        when: Option<DateTime<Utc>>,
        zones: Vec<String>,
        local: bool,
    },
    Decode {
        input: String,
    },
    Inspect {
        token: String,
    },
    Zones,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub registry: Option<PathBuf>,
    pub command: Command,
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| usage(format!("{flag} needs a value")))
}

/// Parses arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut registry = None;

    let name = loop {
        match args.next() {
            Some(arg) if arg == "--registry" => {
                registry = Some(PathBuf::from(value(&mut args, "--registry")?));
            }
            Some(arg) => break arg,
            None => return Err(usage("missing command")),
        }
    };

    let command = match name.as_str() {
        "encode" => {
            let mut when = None;
            let mut zones = Vec::new();
            let mut local = false;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--when" => {
                        let raw = value(&mut args, "--when")?;
                        when = match raw.as_str() {
                            "now" => None,
                            _ => Some(
                                DateTime::parse_from_rfc3339(&raw)
                                    .map_err(|e| usage(format!("invalid --when {raw:?}: {e}")))?
                                    .with_timezone(&Utc),
                            ),
                        };
                    }
                    "--zone" => zones.push(value(&mut args, "--zone")?),
                    "--local" => local = true,
                    _ => return Err(usage(format!("unexpected argument {arg:?}"))),
                }
            }
            Command::Encode { when, zones, local }
        }
        "decode" => Command::Decode {
            input: single(&mut args, "decode")?,
        },
        "inspect" => Command::Inspect {
            token: single(&mut args, "inspect")?,
        },
        "zones" => {
            if let Some(arg) = args.next() {
                return Err(usage(format!("unexpected argument {arg:?}")));
            }
            Command::Zones
        }
        other => return Err(usage(format!("unknown command {other:?}"))),
    };

    Ok(Invocation { registry, command })
}

fn single(args: &mut impl Iterator<Item = String>, command: &str) -> Result<String, CliError> {
    let arg = args
        .next()
        .ok_or_else(|| usage(format!("{command} needs one argument")))?;
    if let Some(extra) = args.next() {
        return Err(usage(format!("unexpected argument {extra:?}")));
    }
    Ok(arg)
}

/// Picks the registry: explicit path, then `env_path`, then IANA.
pub fn load_registry(path: Option<&Path>, env_path: Option<&Path>) -> Result<ZoneRegistry, CliError> {
    match path.or(env_path) {
        Some(path) => Ok(ZoneRegistry::load(path)?),
        None => Ok(ZoneRegistry::iana()),
    }
}

pub fn run(command: &Command, registry: &ZoneRegistry, out: &mut impl Write) -> Result<(), CliError> {
    let codec = StateCodec::new(registry);
    match command {
        Command::Encode { when, zones, local } => {
            let mut zones = zones.clone();
            if *local {
                zones.push(local_zone());
            }
            let selection = Selection::new(when.unwrap_or_else(Utc::now), zones);
            let token = codec.encode(&selection)?;
            writeln!(out, "{token}")?;
        }
        Command::Decode { input } => {
            let parsed = parse_query(input, &codec)?.ok_or_else(|| usage("nothing to decode"))?;
            let selection = parsed.or(&Selection::local_default());
            writeln!(out, "{}", selection.when.to_rfc3339_opts(SecondsFormat::Millis, true))?;
            for zone in &selection.zones {
                writeln!(out, "{zone}")?;
            }
        }
        Command::Inspect { token } => {
            let info = codec.inspect(token)?;
            let version = match info.version {
                FormatVersion::Legacy => "legacy".to_string(),
                v => format!("v{}", v.tag().unwrap_or_default()),
            };
            writeln!(out, "version\t{version}")?;
            writeln!(out, "bytes\t{}", info.byte_len)?;
            writeln!(out, "zones\t{}", info.zone_count)?;
        }
        Command::Zones => {
            for (index, name) in registry.iter().enumerate() {
                writeln!(out, "{index}\t{name}")?;
            }
        }
    }
    Ok(())
}
