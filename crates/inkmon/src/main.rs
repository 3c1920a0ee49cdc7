//! Prometheus-fed e-paper dashboard daemon.
//!
//! Polls a metrics backend every 20 seconds and paints a three-column
//! system dashboard (UPS, GPU, CPU) onto a 250×122 e-paper panel,
//! alternating cheap partial repaints with a flashing full repaint every
//! tenth tick to keep ghosting down. Ships with a simulated panel that
//! mirrors every painted frame to a PNG next to the process; hardware
//! drivers implement the same [`inkmon_panel::Panel`] trait out of tree.

mod config;
mod controller;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::controller::Monitor;
use inkmon_metrics::PromClient;
use inkmon_panel::SimPanel;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();
    info!("e-ink system monitor starting");
    info!(
        url = %config.prometheus_url,
        interval_s = config.refresh_interval.as_secs(),
        panel = config.panel.name,
        "polling configuration"
    );

    let panel = match &config.frame_path {
        Some(path) => {
            info!(path = %path.display(), "mirroring frames to disk");
            SimPanel::new(config.panel).with_export_path(path)
        }
        None => SimPanel::new(config.panel),
    };
    let source = PromClient::new(config.prometheus_url.clone());

    let mut monitor = Monitor::new(config, panel, source);
    monitor
        .start()
        .await
        .context("panel initialization failed")?;

    monitor.run(shutdown_signal()).await;
    info!("panel blanked; exiting");
    Ok(())
}

/// Resolves when the process receives an interrupt.
///
/// If the signal watcher itself cannot be installed the daemon keeps
/// running until killed rather than shutting down spuriously.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received"),
        Err(err) => {
            warn!(?err, "interrupt watcher failed; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
