//! Building a tick's snapshot.

use inkmon_metrics::MetricSource;

use crate::columns::{ColumnSpec, Source};

/// Formatted dashboard content for one tick.
///
/// Built fresh every tick and thrown away after painting; nothing is
/// persisted across ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Columns in display order.
    pub columns: Vec<ColumnSnapshot>,
}

impl Snapshot {
    /// Total body lines across all columns.
    pub fn line_count(&self) -> usize {
        self.columns.iter().map(|column| column.lines.len()).sum()
    }
}

/// One render-ready column: heading plus formatted lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSnapshot {
    /// Column heading.
    pub title: String,
    /// Formatted lines, absent metrics already skipped.
    pub lines: Vec<String>,
}

impl Source {
    /// Evaluate against a metric source.
    ///
    /// Absence of any input makes the whole line absent; the fallback query
    /// is only issued when the primary came back empty.
    // SAFETY: f64 subtraction cannot trap; degenerate inputs degrade to
    // inf/NaN and render as text.
    #[allow(clippy::arithmetic_side_effects)]
    pub async fn resolve<S: MetricSource>(&self, source: &S) -> Option<f64> {
        match self {
            Source::Query(expr) => source.query_value(expr).await,
            Source::QueryWithFallback(primary, fallback) => {
                match source.query_value(primary).await {
                    Some(value) => Some(value),
                    None => source.query_value(fallback).await,
                }
            }
            Source::UsedFrom { total, available } => {
                let total = source.query_value(total).await?;
                let available = source.query_value(available).await?;
                Some(total - available)
            }
        }
    }
}

/// Query every line of every column and format the values that came back.
///
/// Queries run sequentially; the daemon is one logical thread of control.
/// Absent metrics are skipped without a placeholder, so a column can come
/// back with fewer lines (or none) on a bad tick.
pub async fn collect<S: MetricSource>(source: &S, columns: &[ColumnSpec]) -> Snapshot {
    let mut out = Vec::with_capacity(columns.len());
    for column in columns {
        let mut lines = Vec::with_capacity(column.lines.len());
        for line in column.lines {
            if let Some(value) = line.source.resolve(source).await {
                lines.push((line.fmt)(value));
            }
        }
        out.push(ColumnSnapshot {
            title: column.title.to_string(),
            lines,
        });
    }
    Snapshot { columns: out }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::columns::STANDARD_COLUMNS;
    use inkmon_testing::StaticSource;

    #[tokio::test]
    async fn ups_column_skips_absent_lines_and_keeps_order() {
        let source = StaticSource::new([
            ("ups_battery_charge_percent", 87.3),
            ("ups_load_percent", 42.0),
        ]);
        let ups = STANDARD_COLUMNS[0];
        let snapshot = collect(&source, std::slice::from_ref(&ups)).await;

        assert_eq!(snapshot.columns.len(), 1);
        let column = &snapshot.columns[0];
        assert_eq!(column.title, "UPS 1500X");
        assert_eq!(column.lines, ["Battery: 87%", "Load: 42.0%"]);
    }

    #[tokio::test]
    async fn memory_line_subtracts_available_from_total() {
        let source = StaticSource::new([
            ("node_memory_MemTotal_bytes", 17_179_869_184.0),
            ("node_memory_MemAvailable_bytes", 8_589_934_592.0),
        ]);
        let cpu = STANDARD_COLUMNS[2];
        let snapshot = collect(&source, std::slice::from_ref(&cpu)).await;

        assert_eq!(snapshot.columns[0].lines, ["Mem: 8G"]);
    }

    #[tokio::test]
    async fn pair_lines_need_both_values() {
        let source = StaticSource::new([("node_memory_MemTotal_bytes", 17_179_869_184.0)]);
        let cpu = STANDARD_COLUMNS[2];
        let snapshot = collect(&source, std::slice::from_ref(&cpu)).await;

        assert!(snapshot.columns[0].lines.is_empty());
    }

    #[tokio::test]
    async fn temperature_fallback_fires_only_when_primary_is_absent() {
        let fallback = r#"avg(node_hwmon_temp_celsius{chip=~"platform_coretemp_.*"})"#;
        let source = StaticSource::new([(fallback, 55.2)]);
        let cpu = STANDARD_COLUMNS[2];
        let snapshot = collect(&source, std::slice::from_ref(&cpu)).await;
        assert_eq!(snapshot.columns[0].lines, ["Temp: 55°C"]);

        let primary = r#"node_hwmon_temp_celsius{chip="platform_coretemp_0",sensor="temp1"}"#;
        let source = StaticSource::new([(primary, 48.0), (fallback, 55.2)]);
        let snapshot = collect(&source, std::slice::from_ref(&cpu)).await;
        assert_eq!(snapshot.columns[0].lines, ["Temp: 48°C"]);
        assert!(
            !source.queried().iter().any(|expr| expr == fallback),
            "fallback must not be queried when the primary answers"
        );
    }

    #[tokio::test]
    async fn empty_source_yields_titled_empty_columns() {
        let source = StaticSource::default();
        let snapshot = collect(&source, &STANDARD_COLUMNS).await;

        assert_eq!(snapshot.columns.len(), 3);
        assert!(snapshot.columns.iter().all(|column| column.lines.is_empty()));
        assert_eq!(snapshot.line_count(), 0);
        assert_eq!(snapshot.columns[1].title, "RTX 3090 Ti");
    }

    #[tokio::test]
    async fn zero_valued_metrics_still_render() {
        let source = StaticSource::new([("ups_load_percent", 0.0)]);
        let ups = STANDARD_COLUMNS[0];
        let snapshot = collect(&source, std::slice::from_ref(&ups)).await;
        assert_eq!(snapshot.columns[0].lines, ["Load: 0.0%"]);
    }
}
