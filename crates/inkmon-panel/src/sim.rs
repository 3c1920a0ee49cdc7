//! Software panel for development and headless operation.

use std::path::PathBuf;

use embedded_graphics::pixelcolor::BinaryColor;
use image::{GrayImage, Luma};
use thiserror::Error;

use crate::frame::Frame;
use crate::panel::Panel;
use crate::spec::PanelSpec;

/// Errors raised by the simulated panel.
#[derive(Debug, Error)]
pub enum SimPanelError {
    /// Driver command issued while the panel is in deep sleep.
    #[error("panel is asleep; init required")]
    Asleep,
    /// Writing the exported frame image failed.
    #[error("frame export failed: {0}")]
    Export(#[from] image::ImageError),
}

/// Operation counters and wear bookkeeping for the simulated panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimStats {
    /// `init` calls.
    pub inits: u32,
    /// `clear` calls.
    pub clears: u32,
    /// Full repaints.
    pub full_paints: u32,
    /// Partial repaints.
    pub partial_paints: u32,
    /// `sleep` calls.
    pub sleeps: u32,
    /// Estimated ghosting level (0.0 to 1.0). Grows with partial repaints,
    /// cleared by full repaints and floods.
    pub ghosting: f32,
}

/// Headless software panel.
///
/// Implements [`Panel`] against a [`PanelSpec`]: tracks the asleep/ready
/// state machine, keeps a copy of the frame currently "on glass", models
/// refresh timing and ghosting accumulation, and optionally exports each
/// painted frame as an 8-bit grayscale PNG so the dashboard can be
/// inspected without hardware.
#[derive(Debug)]
pub struct SimPanel {
    spec: PanelSpec,
    awake: bool,
    stats: SimStats,
    shown: Frame,
    export_path: Option<PathBuf>,
}

impl SimPanel {
    /// Panel in deep sleep with a white screen.
    pub fn new(spec: PanelSpec) -> Self {
        Self {
            shown: Frame::new(spec.width, spec.height),
            spec,
            awake: false,
            stats: SimStats::default(),
            export_path: None,
        }
    }

    /// Write every painted frame to `path` as a grayscale PNG.
    #[must_use]
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    /// The panel description this simulator models.
    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    /// Operation counters.
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// The frame currently on the simulated glass.
    pub fn shown(&self) -> &Frame {
        &self.shown
    }

    fn ensure_awake(&self) -> Result<(), SimPanelError> {
        if self.awake {
            Ok(())
        } else {
            Err(SimPanelError::Asleep)
        }
    }

    fn export(&self) -> Result<(), SimPanelError> {
        if let Some(path) = &self.export_path {
            frame_to_image(&self.shown).save(path)?;
        }
        Ok(())
    }

    // SAFETY: ghosting is clamped to 1.0, so the f32 addition cannot grow
    // without bound.
    #[allow(clippy::arithmetic_side_effects)]
    fn accumulate_ghosting(&mut self) {
        self.stats.ghosting = (self.stats.ghosting + self.spec.ghosting_per_partial).min(1.0);
    }
}

/// White 255, ink 0, matching how the panel looks in daylight.
fn frame_to_image(frame: &Frame) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        if frame.pixel(x, y) == Some(true) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

impl Panel for SimPanel {
    type Error = SimPanelError;

    async fn init(&mut self) -> Result<(), Self::Error> {
        self.awake = true;
        self.stats.inits = self.stats.inits.saturating_add(1);
        Ok(())
    }

    async fn clear(&mut self, fill: BinaryColor) -> Result<(), Self::Error> {
        self.ensure_awake()?;
        tokio::time::sleep(self.spec.full_refresh_duration()).await;
        self.shown.fill(fill);
        self.stats.clears = self.stats.clears.saturating_add(1);
        self.stats.ghosting = 0.0;
        self.export()
    }

    async fn paint_full(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.ensure_awake()?;
        tokio::time::sleep(self.spec.full_refresh_duration()).await;
        self.shown = frame.clone();
        self.stats.full_paints = self.stats.full_paints.saturating_add(1);
        self.stats.ghosting = 0.0;
        self.export()
    }

    async fn paint_partial(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.ensure_awake()?;
        tokio::time::sleep(self.spec.partial_refresh_duration()).await;
        self.shown = frame.clone();
        self.stats.partial_paints = self.stats.partial_paints.saturating_add(1);
        self.accumulate_ghosting();
        self.export()
    }

    async fn sleep(&mut self) -> Result<(), Self::Error> {
        self.awake = false;
        self.stats.sleeps = self.stats.sleeps.saturating_add(1);
        Ok(())
    }
}
