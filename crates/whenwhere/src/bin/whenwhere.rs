//! `whenwhere` binary. See [`whenwhere::cli`] for usage.

use std::io;
use std::path::PathBuf;

use whenwhere::cli::{self, CliError, REGISTRY_ENV, USAGE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        eprintln!("whenwhere: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        std::process::exit(err.exit_code());
    }
}

fn try_main() -> Result<(), CliError> {
    let invocation = cli::parse_args(std::env::args().skip(1))?;
    let env_path = std::env::var_os(REGISTRY_ENV).map(PathBuf::from);
    let registry = cli::load_registry(invocation.registry.as_deref(), env_path.as_deref())?;
    log::debug!("using a registry of {} zones", registry.len());

    let stdout = io::stdout();
    cli::run(&invocation.command, &registry, &mut stdout.lock())
}
