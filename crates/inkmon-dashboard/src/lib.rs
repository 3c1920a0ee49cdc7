//! Dashboard composition: metric collection and frame rendering.
//!
//! The crate is split along a pure seam:
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ MetricSource │ ──▶ │   Snapshot    │ ──▶ │    Frame     │
//! │  (queries)   │     │ (collected    │     │  (rendered   │
//! │              │     │   strings)    │     │   pixels)    │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        collect()                render_frame()
//! ```
//!
//! [`collect`] resolves a column layout against a live metric source and
//! keeps only the lines whose metrics answered. [`render`] turns a snapshot
//! plus a wall-clock timestamp into pixels. Everything between the two is
//! plain data, so both halves test without hardware or a network.
//!
//! [`collect`]: collect::collect
//! [`render`]: render::render

pub mod collect;
pub mod columns;
pub mod format;
pub mod render;

pub use collect::{collect, ColumnSnapshot, Snapshot};
pub use columns::{ColumnSpec, LineSpec, Source, STANDARD_COLUMNS};
pub use render::{render, render_frame};
