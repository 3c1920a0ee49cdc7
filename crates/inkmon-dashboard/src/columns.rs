//! Declarative column layout.
//!
//! A column is data: a title plus an ordered list of line specs, each
//! pairing a value source with a formatter. The collector interprets the
//! specs every tick; nothing here talks to the network or the panel.

use crate::format;

/// How one dashboard line obtains its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// One instant query.
    Query(&'static str),
    /// Primary query, then an aggregate fallback if the primary is absent.
    QueryWithFallback(&'static str, &'static str),
    /// Two queries combined as total minus available.
    UsedFrom {
        /// Expression for the total capacity.
        total: &'static str,
        /// Expression for the still-available share.
        available: &'static str,
    },
}

/// One line of a column: where its value comes from and how to print it.
#[derive(Debug, Clone, Copy)]
pub struct LineSpec {
    /// Value source evaluated each tick.
    pub source: Source,
    /// Formatter applied when the value is present.
    pub fmt: fn(f64) -> String,
}

/// A dashboard column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Column heading.
    pub title: &'static str,
    /// Lines in display order.
    pub lines: &'static [LineSpec],
}

/// The reference deployment: UPS, GPU, and CPU columns.
pub const STANDARD_COLUMNS: [ColumnSpec; 3] = [
    ColumnSpec {
        title: "UPS 1500X",
        lines: &[
            LineSpec {
                source: Source::Query("ups_battery_charge_percent"),
                fmt: format::battery_percent,
            },
            LineSpec {
                source: Source::Query("ups_runtime_minutes"),
                fmt: format::runtime_minutes,
            },
            LineSpec {
                source: Source::Query("ups_load_percent"),
                fmt: format::load_percent,
            },
            LineSpec {
                source: Source::Query("ups_temperature_celsius"),
                fmt: format::ups_temp_celsius,
            },
            LineSpec {
                source: Source::Query("ups_input_voltage"),
                fmt: format::input_voltage,
            },
            LineSpec {
                source: Source::Query("ups_output_voltage"),
                fmt: format::output_voltage,
            },
            LineSpec {
                source: Source::Query("ups_load_current"),
                fmt: format::load_amps,
            },
        ],
    },
    ColumnSpec {
        title: "RTX 3090 Ti",
        lines: &[
            LineSpec {
                source: Source::Query("nvidia_gpu_temperature_celsius"),
                fmt: format::temp_celsius,
            },
            LineSpec {
                source: Source::Query("nvidia_gpu_utilization_percent"),
                fmt: format::util_percent,
            },
            LineSpec {
                source: Source::Query("nvidia_gpu_power_draw_watts"),
                fmt: format::power_watts,
            },
            LineSpec {
                source: Source::Query("nvidia_gpu_fan_percent"),
                fmt: format::fan_percent,
            },
            LineSpec {
                source: Source::Query("nvidia_gpu_clock_graphics_mhz"),
                fmt: format::core_clock,
            },
            LineSpec {
                source: Source::Query("nvidia_gpu_clock_memory_mhz"),
                fmt: format::memory_clock,
            },
        ],
    },
    ColumnSpec {
        title: "CPU",
        lines: &[
            LineSpec {
                source: Source::QueryWithFallback(
                    r#"node_hwmon_temp_celsius{chip="platform_coretemp_0",sensor="temp1"}"#,
                    r#"avg(node_hwmon_temp_celsius{chip=~"platform_coretemp_.*"})"#,
                ),
                fmt: format::temp_celsius,
            },
            LineSpec {
                source: Source::Query("avg(node_cpu_scaling_frequency_hertz)"),
                fmt: format::freq_ghz,
            },
            LineSpec {
                source: Source::Query(
                    r#"100 - (avg(irate(node_cpu_seconds_total{mode="idle"}[1m])) * 100)"#,
                ),
                fmt: format::usage_percent,
            },
            LineSpec {
                source: Source::UsedFrom {
                    total: "node_memory_MemTotal_bytes",
                    available: "node_memory_MemAvailable_bytes",
                },
                fmt: format::mem_used_gib,
            },
            LineSpec {
                source: Source::UsedFrom {
                    total: r#"node_filesystem_size_bytes{mountpoint="/"}"#,
                    available: "node_filesystem_avail_bytes",
                },
                fmt: format::disk_used_tib,
            },
            LineSpec {
                source: Source::Query(r#"node_hwmon_fan_rpm{sensor="fan3"}"#),
                fmt: format::chassis_fan_rpm,
            },
        ],
    },
];
