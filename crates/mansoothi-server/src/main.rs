//! Mansoothi server binary.
//!
//! Loads configuration, initializes structured logging, prepares the
//! database and serves the HTTP API until SIGINT/SIGTERM.

use mansoothi_server::{config, startup};
use std::process::ExitCode;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("MANSOOTHI_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

#[tokio::main]
async fn main() -> ExitCode {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().unwrap_or("config.toml");

    let config = match config::load_config(Some(selected_config_path)) {
        Ok(config) => config,
        Err(e) => {
            // The subscriber depends on the config, so this is reported raw.
            eprintln!("mansoothi-server: {e}");
            return ExitCode::FAILURE;
        }
    };

    startup::init_tracing(&config.logging);

    tracing::info!(
        source = config_source,
        path = selected_config_path,
        "resolved startup configuration path"
    );

    match startup::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "mansoothi server failed to start");
            ExitCode::FAILURE
        }
    }
}
