//! Driver-facing panel interface.

use core::future::Future;

use embedded_graphics::pixelcolor::BinaryColor;

use crate::frame::Frame;

/// The capability set this daemon needs from an e-paper driver.
///
/// Hardware drivers implement this against their vendor library; the
/// simulator implements it in software. All methods take `&mut self`: a
/// panel is a serially owned device with no interior concurrency.
pub trait Panel {
    /// Error raised by driver I/O.
    type Error: core::fmt::Debug;

    /// Power up and configure the controller.
    ///
    /// Must tolerate being called again on an already-initialized panel;
    /// full repaints re-run it to reset the panel's waveform state.
    fn init(&mut self) -> impl Future<Output = Result<(), Self::Error>>;

    /// Flood the panel with a solid color.
    fn clear(&mut self, fill: BinaryColor) -> impl Future<Output = Result<(), Self::Error>>;

    /// Push a frame through the flashing full-refresh path.
    fn paint_full(&mut self, frame: &Frame) -> impl Future<Output = Result<(), Self::Error>>;

    /// Push a frame through the incremental-update path.
    fn paint_partial(&mut self, frame: &Frame) -> impl Future<Output = Result<(), Self::Error>>;

    /// Enter deep sleep. Waking requires [`Panel::init`].
    fn sleep(&mut self) -> impl Future<Output = Result<(), Self::Error>>;
}
