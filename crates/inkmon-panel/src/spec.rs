//! Static descriptors for supported panel models.

use std::time::Duration;

/// Physical characteristics of one e-paper panel model.
///
/// Values come from vendor datasheets and measured behavior; they drive the
/// simulator's timing and ghosting model and size the daemon's framebuffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    /// Marketing name of the panel.
    pub name: &'static str,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Nominal full-refresh duration in milliseconds.
    pub full_refresh_ms: u32,
    /// Nominal partial-refresh duration in milliseconds.
    pub partial_refresh_ms: u32,
    /// Ghosting accumulated by one partial refresh (0.0 to 1.0).
    pub ghosting_per_partial: f32,
}

impl PanelSpec {
    /// Nominal full-refresh duration.
    pub fn full_refresh_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.full_refresh_ms))
    }

    /// Nominal partial-refresh duration.
    pub fn partial_refresh_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.partial_refresh_ms))
    }
}

/// Waveshare 2.13" V4 (SSD1680 class), the reference panel.
///
/// 250×122, full refresh ~2 s with flashing, partial refresh ~300 ms with
/// roughly 15% ghosting accumulation per update.
pub const WAVESHARE_2IN13_V4: PanelSpec = PanelSpec {
    name: "Waveshare 2.13\" V4",
    width: 250,
    height: 122,
    full_refresh_ms: 2000,
    partial_refresh_ms: 300,
    ghosting_per_partial: 0.15,
};
