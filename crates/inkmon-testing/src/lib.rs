//! Test doubles and frame assertions for the monitor stack.
//!
//! Everything the daemon talks to sits behind a trait, so tests swap in the
//! doubles here and drive whole ticks without a network or a panel:
//!
//! - [`StaticSource`] answers metric queries from a fixed table and logs
//!   every expression it is asked.
//! - [`RecordingPanel`] logs panel commands in order and can be scripted to
//!   fail the next one of a given kind.
//! - [`region_ink_count`] inspects rendered [`Frame`]s region by region.
//!
//! # Quick start
//!
//! ```no_run
//! use inkmon_panel::{Frame, Panel};
//! use inkmon_testing::{PanelOp, RecordingPanel};
//!
//! # async fn demo() -> Result<(), inkmon_testing::ScriptedFailure> {
//! let mut panel = RecordingPanel::new();
//! panel.init().await?;
//! panel.paint_partial(&Frame::new(250, 122)).await?;
//! assert_eq!(panel.take_ops(), vec![PanelOp::Init, PanelOp::PaintPartial]);
//! # Ok(())
//! # }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use embedded_graphics::pixelcolor::BinaryColor;
use inkmon_metrics::MetricSource;
use inkmon_panel::{Frame, Panel};

// ─────────────────────────────────────────────────────────────────────────────
// StaticSource
// ─────────────────────────────────────────────────────────────────────────────

/// A metric source backed by a fixed expression → value table.
///
/// Expressions missing from the table read as absent, exactly like an
/// exporter that stopped publishing them. Every query is logged so tests
/// can assert what was (and was not) asked.
#[derive(Debug, Default)]
pub struct StaticSource {
    values: HashMap<String, f64>,
    queried: RefCell<Vec<String>>,
}

impl StaticSource {
    /// Build a source answering exactly the given expressions.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            values: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            queried: RefCell::new(Vec::new()),
        }
    }

    /// Every expression queried so far, in order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl MetricSource for StaticSource {
    async fn query_value(&self, expr: &str) -> Option<f64> {
        self.queried.borrow_mut().push(expr.to_owned());
        self.values.get(expr).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingPanel
// ─────────────────────────────────────────────────────────────────────────────

/// A panel command, as recorded by [`RecordingPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOp {
    /// Controller (re-)initialised the panel.
    Init,
    /// Controller cleared the panel to the given fill.
    Clear(BinaryColor),
    /// Controller pushed a frame with a full repaint.
    PaintFull,
    /// Controller pushed a frame with a partial repaint.
    PaintPartial,
    /// Controller put the panel to sleep.
    Sleep,
}

/// The error a scripted [`RecordingPanel`] failure surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedFailure;

/// A panel double that records every command it receives.
///
/// Commands succeed by default. `fail_next_*` arms a one-shot failure for
/// the matching command; the command is still recorded, the failure fires
/// once, and the panel behaves normally afterwards.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    ops: Vec<PanelOp>,
    shown: Option<Frame>,
    fail_next_init: bool,
    fail_next_full: bool,
    fail_next_partial: bool,
}

impl RecordingPanel {
    /// Create a panel with an empty command log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in order.
    pub fn ops(&self) -> &[PanelOp] {
        &self.ops
    }

    /// Drain and return the command log.
    pub fn take_ops(&mut self) -> Vec<PanelOp> {
        std::mem::take(&mut self.ops)
    }

    /// The frame most recently pushed by a successful paint.
    pub fn shown(&self) -> Option<&Frame> {
        self.shown.as_ref()
    }

    /// Arm a one-shot failure for the next `init`.
    pub fn fail_next_init(&mut self) {
        self.fail_next_init = true;
    }

    /// Arm a one-shot failure for the next `paint_full`.
    pub fn fail_next_full(&mut self) {
        self.fail_next_full = true;
    }

    /// Arm a one-shot failure for the next `paint_partial`.
    pub fn fail_next_partial(&mut self) {
        self.fail_next_partial = true;
    }
}

impl Panel for RecordingPanel {
    type Error = ScriptedFailure;

    async fn init(&mut self) -> Result<(), Self::Error> {
        self.ops.push(PanelOp::Init);
        if std::mem::take(&mut self.fail_next_init) {
            return Err(ScriptedFailure);
        }
        Ok(())
    }

    async fn clear(&mut self, fill: BinaryColor) -> Result<(), Self::Error> {
        self.ops.push(PanelOp::Clear(fill));
        Ok(())
    }

    async fn paint_full(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.ops.push(PanelOp::PaintFull);
        if std::mem::take(&mut self.fail_next_full) {
            return Err(ScriptedFailure);
        }
        self.shown = Some(frame.clone());
        Ok(())
    }

    async fn paint_partial(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.ops.push(PanelOp::PaintPartial);
        if std::mem::take(&mut self.fail_next_partial) {
            return Err(ScriptedFailure);
        }
        self.shown = Some(frame.clone());
        Ok(())
    }

    async fn sleep(&mut self) -> Result<(), Self::Error> {
        self.ops.push(PanelOp::Sleep);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frame assertions
// ─────────────────────────────────────────────────────────────────────────────

/// Count the ink pixels inside the inclusive region `(x0, y0)..=(x1, y1)`.
///
/// Coordinates outside the frame read as white, so an over-wide region is
/// harmless in assertions.
pub fn region_ink_count(frame: &Frame, x0: u32, y0: u32, x1: u32, y1: u32) -> usize {
    (y0..=y1)
        .flat_map(|y| (x0..=x1).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.pixel(x, y) == Some(true))
        .count()
}

/// Whether the inclusive region `(x0, y0)..=(x1, y1)` is entirely white.
pub fn region_is_blank(frame: &Frame, x0: u32, y0: u32, x1: u32, y1: u32) -> bool {
    region_ink_count(frame, x0, y0, x1, y1) == 0
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_answers_and_logs() {
        let source = StaticSource::new([("up", 1.0), ("load", 0.25)]);

        assert_eq!(source.query_value("up").await, Some(1.0));
        assert_eq!(source.query_value("missing").await, None);
        assert_eq!(source.query_value("load").await, Some(0.25));

        assert_eq!(source.queried(), vec!["up", "missing", "load"]);
    }

    #[tokio::test]
    async fn default_source_answers_nothing() {
        let source = StaticSource::default();
        assert_eq!(source.query_value("anything").await, None);
    }

    #[tokio::test]
    async fn recording_panel_logs_commands_in_order() {
        let mut panel = RecordingPanel::new();
        let frame = Frame::new(4, 4);

        panel.init().await.unwrap();
        panel.clear(BinaryColor::Off).await.unwrap();
        panel.paint_full(&frame).await.unwrap();
        panel.paint_partial(&frame).await.unwrap();
        panel.sleep().await.unwrap();

        assert_eq!(
            panel.ops(),
            &[
                PanelOp::Init,
                PanelOp::Clear(BinaryColor::Off),
                PanelOp::PaintFull,
                PanelOp::PaintPartial,
                PanelOp::Sleep,
            ]
        );
    }

    #[tokio::test]
    async fn scripted_partial_failure_fires_once() {
        let mut panel = RecordingPanel::new();
        let frame = Frame::new(4, 4);

        panel.fail_next_partial();
        assert_eq!(panel.paint_partial(&frame).await, Err(ScriptedFailure));
        assert!(panel.shown().is_none());

        panel.paint_partial(&frame).await.unwrap();
        assert_eq!(panel.shown(), Some(&frame));
        assert_eq!(panel.ops(), &[PanelOp::PaintPartial, PanelOp::PaintPartial]);
    }

    #[tokio::test]
    async fn scripted_init_failure_is_recorded() {
        let mut panel = RecordingPanel::new();
        panel.fail_next_init();
        assert_eq!(panel.init().await, Err(ScriptedFailure));
        assert_eq!(panel.ops(), &[PanelOp::Init]);
    }

    #[tokio::test]
    async fn take_ops_drains_the_log() {
        let mut panel = RecordingPanel::new();
        panel.init().await.unwrap();
        assert_eq!(panel.take_ops(), vec![PanelOp::Init]);
        assert!(panel.ops().is_empty());
    }

    #[test]
    fn region_ink_count_uses_inclusive_bounds() {
        let mut frame = Frame::new(8, 8);
        frame.set_pixel(2, 2, true);
        frame.set_pixel(3, 3, true);
        frame.set_pixel(4, 4, true);

        assert_eq!(region_ink_count(&frame, 2, 2, 4, 4), 3);
        assert_eq!(region_ink_count(&frame, 2, 2, 3, 3), 2);
        assert_eq!(region_ink_count(&frame, 0, 0, 1, 1), 0);
    }

    #[test]
    fn region_helpers_tolerate_out_of_bounds_regions() {
        let mut frame = Frame::new(4, 4);
        frame.set_pixel(3, 3, true);

        assert_eq!(region_ink_count(&frame, 0, 0, 100, 100), 1);
        assert!(region_is_blank(&frame, 10, 10, 20, 20));
    }
}
