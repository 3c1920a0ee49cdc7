//! Panel layer for the inkmon e-paper dashboard.
//!
//! Everything the daemon knows about electronic paper lives here:
//!
//! - [`Frame`]: an owned 1-bit framebuffer implementing
//!   [`embedded_graphics::draw_target::DrawTarget`], so text and primitives
//!   render into memory before anything touches a panel.
//! - [`PanelSpec`]: static descriptors for supported panel models, including
//!   the reference [`WAVESHARE_2IN13_V4`].
//! - [`RefreshState`]: the partial/full repaint scheduler that keeps
//!   ghosting in check.
//! - [`Panel`]: the narrow driver interface (`init`, `clear`, `paint_full`,
//!   `paint_partial`, `sleep`). Hardware drivers implement it out of tree;
//!   [`SimPanel`] implements it in software for development and headless
//!   operation.

pub mod frame;
pub mod panel;
pub mod refresh;
pub mod sim;
pub mod spec;

pub use frame::Frame;
pub use panel::Panel;
pub use refresh::{PaintMode, RefreshState};
pub use sim::{SimPanel, SimPanelError, SimStats};
pub use spec::{PanelSpec, WAVESHARE_2IN13_V4};
