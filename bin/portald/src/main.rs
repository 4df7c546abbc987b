//! `portald` — the EDUVA portal host daemon.
//!
//! Usage:
//!   portald -c <context-name-or-path> [--listen <addr>] [--offline]
//!
//! The context name resolves to `/etc/eduva/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.
//!
//! Runs one [`Portal`] and serves its state and intents as JSON, for
//! shells that render out of process (kiosks, smoke tests, the demo UI).

mod config;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use clap::Parser;
use eduva_portal::request::SetLocaleReq;
use eduva_portal::{i18n, Portal};
use tracing::info;

use config::PortalConfig;
use routes::AppState;

/// EDUVA portal host.
#[derive(Parser, Debug)]
#[command(name = "portald", about = "EDUVA portal host")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address (overrides the configured one).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Serve the seeded in-memory backend instead of a real API.
    #[arg(long = "offline")]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load host configuration; flags override file values.
    let mut config = match &cli.config {
        Some(name) => {
            let path = PortalConfig::resolve_path(name);
            info!("Loading configuration from {}", path.display());
            PortalConfig::load(&path)?
        }
        None => PortalConfig::default(),
    };
    if cli.offline {
        config.offline = true;
    }
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }
    config.verify()?;

    // Build the portal and bring it to the first-render state.
    let portal = if config.offline {
        info!("Serving the seeded offline backend");
        Portal::offline()
    } else {
        info!(api = %config.api_base_url, "Connecting to the EDUVA backend");
        Portal::connect(&config.api_base_url)
    };
    if let Some(token) = &config.token {
        portal.token().set(token);
    }
    portal.initialize().await;
    if config.locale != i18n::DEFAULT_LOCALE {
        portal
            .engine()
            .emit(
                SetLocaleReq::PATH,
                SetLocaleReq {
                    locale: config.locale.clone(),
                },
            )
            .await;
    }

    // Keep the footer year honest across New Year without a restart.
    let year = portal.layout().year.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(3600));
        tick.tick().await;
        loop {
            tick.tick().await;
            let now = Utc::now().year();
            if year.get() != now {
                year.set(now);
            }
        }
    });

    // Serve.
    let state = AppState {
        portal: Arc::new(portal),
    };
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("portald listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
