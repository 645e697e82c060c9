//! Parley application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Initialize tracing
//! 3. Train the chat bot (fatal on failure)
//! 4. Serve the HTTP API until Ctrl-C

mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use parley_api::AppState;
use parley_core::config::ParleyConfig;
use parley_core::ParleyError;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing so its log level can apply; the outcome
    // is logged once the subscriber is up.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match read_config(&config_file, args.config_is_explicit()) {
        Ok(loaded) => loaded,
        Err(e) => {
            return Err(format!("cannot load config {}: {}", config_file.display(), e).into());
        }
    };

    // Tracing. RUST_LOG wins over --log-level and the config file.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting Parley v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config; using defaults"
        ),
    }

    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    config.server.port = args.resolve_port(config.server.port);
    config.general.log_level = level;

    // Training blocks; run it off the async workers before binding.
    let train_config = config.clone();
    let (bot, report) =
        match tokio::task::spawn_blocking(move || parley_engine::bootstrap(&train_config)).await? {
            Ok(trained) => trained,
            Err(e) => {
                tracing::error!(error = %e, "Chat bot training failed");
                return Err(e.into());
            }
        };
    tracing::info!(
        statements = report.statements,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Chat bot ready"
    );

    let state = AppState::new(Arc::new(bot), config);
    if let Err(e) = parley_api::start_server(state).await {
        tracing::error!(error = %e, "API server failed");
        return Err(e.into());
    }

    Ok(())
}

/// Load the config file. A path named by `--config` or `PARLEY_CONFIG` must
/// load; the default path falls back to defaults and hands back the error.
fn read_config(
    path: &Path,
    explicit: bool,
) -> Result<(ParleyConfig, Option<ParleyError>), ParleyError> {
    match ParleyConfig::load(path) {
        Ok(config) => Ok((config, None)),
        Err(e) if explicit => Err(e),
        Err(e) => Ok((ParleyConfig::default(), Some(e))),
    }
}
