//! The refresh loop.
//!
//! One `Monitor` owns the panel, the metric source, and the repaint
//! schedule. Ticks are atomic from the outside: a tick either gets its
//! frame onto the glass or logs why it could not, and the loop carries on
//! either way. Only the sleep between ticks can be interrupted.

use std::future::Future;

use chrono::Local;
use embedded_graphics::pixelcolor::BinaryColor;
use inkmon_dashboard::{collect, render_frame, STANDARD_COLUMNS};
use inkmon_metrics::MetricSource;
use inkmon_panel::{Frame, PaintMode, Panel, RefreshState};
use tracing::{debug, error, info, warn};

use crate::config::Config;

/// The daemon core, generic over the panel driver and the metric source.
pub struct Monitor<P, S> {
    config: Config,
    panel: P,
    source: S,
    refresh: RefreshState,
}

impl<P, S> Monitor<P, S>
where
    P: Panel,
    S: MetricSource,
{
    /// Wire up a monitor. Nothing touches the panel until [`Monitor::start`].
    pub fn new(config: Config, panel: P, source: S) -> Self {
        let refresh = RefreshState::new(config.full_refresh_cycles);
        Self {
            config,
            panel,
            source,
            refresh,
        }
    }

    /// Wake the panel and flood it white.
    ///
    /// A panel that cannot be brought up is fatal; the caller decides how
    /// to surface that.
    pub async fn start(&mut self) -> Result<(), P::Error> {
        self.panel.init().await?;
        self.panel.clear(BinaryColor::Off).await
    }

    /// One fetch-render-paint pass.
    ///
    /// Driver errors are logged and swallowed; a failed tick leaves the
    /// previous image on the glass and the next tick proceeds normally.
    pub async fn tick(&mut self) {
        let snapshot = collect(&self.source, &STANDARD_COLUMNS).await;
        let frame = render_frame(
            &self.config.panel,
            &self.config.header_title,
            &snapshot,
            Local::now(),
        );
        let mode = self.refresh.advance();
        debug!(
            mode = mode.name(),
            lines = snapshot.line_count(),
            "painting tick"
        );
        if let Err(err) = self.paint(mode, &frame).await {
            error!(mode = mode.name(), ?err, "paint failed; keeping previous image");
        }
    }

    async fn paint(&mut self, mode: PaintMode, frame: &Frame) -> Result<(), P::Error> {
        match mode {
            PaintMode::Full => {
                self.panel.init().await?;
                self.panel.paint_full(frame).await
            }
            PaintMode::Partial => self.panel.paint_partial(frame).await,
        }
    }

    /// Tick until `shutdown` resolves, then blank the panel.
    ///
    /// Shutdown is only observed between ticks; it interrupts the sleep,
    /// never a paint in progress.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        loop {
            self.tick().await;
            tokio::select! {
                () = &mut shutdown => break,
                () = tokio::time::sleep(self.config.refresh_interval) => {}
            }
        }
        self.finish().await;
    }

    /// Best-effort cleanup: wake, flood white, deep sleep. Each step's
    /// failure is logged and swallowed.
    async fn finish(&mut self) {
        info!("shutting down; blanking panel");
        if let Err(err) = self.panel.init().await {
            warn!(?err, "cleanup init failed");
        }
        if let Err(err) = self.panel.clear(BinaryColor::Off).await {
            warn!(?err, "cleanup clear failed");
        }
        if let Err(err) = self.panel.sleep().await {
            warn!(?err, "cleanup sleep failed");
        }
    }
}
