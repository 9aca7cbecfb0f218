//! # greenhoused — greenhouse daemon
//!
//! Composition root that wires everything together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Read the three bootstrap files (soil history, ideal parameters,
//!   preconfigurations) once, before the aggregate is shared
//! - Construct the [`GreenhouseState`] aggregate and the shared lock
//! - Construct application services and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use greenhouse_adapter_http_axum::router;
use greenhouse_adapter_http_axum::state::AppState;
use greenhouse_app::bootstrap;
use greenhouse_app::ports::SystemClock;
use greenhouse_app::shared::SharedGreenhouse;
use greenhouse_domain::greenhouse::GreenhouseState;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Bootstrap — file IO happens here, before the lock exists.
    let soil_history = bootstrap::parse_soil_history(&read_source(&config.bootstrap.soil_history)?)?;
    let ideal_parameters =
        bootstrap::parse_ideal_parameters(&read_source(&config.bootstrap.ideal_parameters)?)?;
    let preconfigurations =
        bootstrap::parse_preconfigurations(&read_source(&config.bootstrap.preconfigurations)?)?;

    tracing::info!(
        seasons = soil_history.entries().len(),
        preconfigurations = preconfigurations.len(),
        "bootstrap data loaded"
    );

    let shared = SharedGreenhouse::new(GreenhouseState::new(
        ideal_parameters,
        soil_history,
        preconfigurations,
    ));

    let app = router::build(AppState::new(&shared, SystemClock));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "greenhoused listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("greenhoused stopped");
    Ok(())
}

/// Read one bootstrap file. A missing file is not fatal: the corresponding
/// component starts empty, which matches a fresh deployment.
fn read_source(path: &str) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path, "bootstrap file not found, starting empty");
            Ok(String::new())
        }
        Err(err) => Err(anyhow::Error::from(err).context(format!("reading {path}"))),
    }
}

/// Resolve when either SIGINT (Ctrl+C) or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
