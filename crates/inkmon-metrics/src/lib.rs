//! Metrics access for the inkmon dashboard.
//!
//! One concern: evaluate a Prometheus instant query down to an optional
//! scalar. The dashboard re-queries every metric every tick and treats a
//! missing value as a normal outcome, so the whole surface is
//! [`MetricSource::query_value`] returning `Option<f64>`; the failure
//! taxonomy behind an absence is internal ([`QueryError`]) and only shows
//! up in debug traces.

use core::future::Future;

pub mod client;
pub mod reply;

pub use client::{PromClient, QUERY_TIMEOUT};
pub use reply::{parse_reply, QueryError};

/// A source of single-value metric readings.
///
/// `None` means "no usable value this tick": backend unreachable, expression
/// matched nothing, reply malformed. Absence is first-class and must never
/// be conflated with a numeric zero.
pub trait MetricSource {
    /// Evaluate one instant query and return its scalar value, if any.
    fn query_value(&self, expr: &str) -> impl Future<Output = Option<f64>>;
}
