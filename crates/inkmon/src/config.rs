//! Daemon configuration.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use inkmon_panel::{PanelSpec, WAVESHARE_2IN13_V4};

/// Everything the daemon needs to run, handed to the controller whole.
///
/// Compile-time defaults describe the reference deployment; tests build
/// their own values with struct update syntax.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the metrics backend.
    pub prometheus_url: String,
    /// Pause between ticks.
    pub refresh_interval: Duration,
    /// Repaints per full refresh; the tick hitting this count flashes.
    pub full_refresh_cycles: NonZeroU32,
    /// Station title on the header row.
    pub header_title: String,
    /// Panel model this deployment drives.
    pub panel: PanelSpec,
    /// Where the simulated panel mirrors each painted frame, if anywhere.
    pub frame_path: Option<PathBuf>,
}

impl Default for Config {
    // SAFETY: the cycle-limit literal is non-zero.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            prometheus_url: "http://localhost:9090".to_owned(),
            refresh_interval: Duration::from_secs(20),
            full_refresh_cycles: NonZeroU32::new(10).unwrap(),
            header_title: "DELL 7820 Server Stats".to_owned(),
            panel: WAVESHARE_2IN13_V4,
            frame_path: Some(PathBuf::from("inkmon.png")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_deployment() {
        let config = Config::default();
        assert_eq!(config.prometheus_url, "http://localhost:9090");
        assert_eq!(config.refresh_interval, Duration::from_secs(20));
        assert_eq!(config.full_refresh_cycles.get(), 10);
        assert_eq!(config.panel.width, 250);
        assert_eq!(config.panel.height, 122);
        assert_eq!(config.frame_path.as_deref(), Some(std::path::Path::new("inkmon.png")));
    }
}
