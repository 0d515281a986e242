mod environment;

use environment::{EnvironmentConfig, EnvironmentError, EnvironmentName};
use std::env;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

fn parse_arg(prefix: &str) -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(prefix).map(str::to_string))
}

fn init_tracing(enable_logging: bool) {
    let level = if enable_logging {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Resolve the record from `--config=<path>`, `--env=<name>`, or `APP_ENV`.
fn resolve_environment() -> Result<EnvironmentConfig, EnvironmentError> {
    if let Some(path) = parse_arg("--config=") {
        return EnvironmentConfig::load(&path);
    }

    if let Some(name) = parse_arg("--env=") {
        let name: EnvironmentName = name.parse()?;
        return Ok(EnvironmentConfig::select(name));
    }

    EnvironmentConfig::resolve()
}

fn main() {
    dotenvy::dotenv().ok();

    let config = match resolve_environment() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to resolve environment: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.enable_logging);

    info!(
        app = %config.app_name,
        version = %config.version,
        production = config.production,
        api_url = %config.api_url,
        "Environment resolved"
    );

    // The snapshot on stdout is what build tooling embeds into the bundle.
    match config.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize environment: {}", e);
            std::process::exit(1);
        }
    }
}
