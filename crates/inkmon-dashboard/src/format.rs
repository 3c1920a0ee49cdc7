//! Value formatting, one small function per unit rule.
//!
//! These are plain `fn(f64) -> String` so column specs can name them as
//! function pointers. Precision and suffixes match the deployed dashboard;
//! a handful of tests below pin the exact strings.

const GIB: f64 = 1_073_741_824.0;
const TIB: f64 = 1_099_511_627_776.0;

/// `Battery: 87%`
pub fn battery_percent(v: f64) -> String {
    format!("Battery: {v:.0}%")
}

/// `Runtime: 10m`
pub fn runtime_minutes(v: f64) -> String {
    format!("Runtime: {v:.0}m")
}

/// `Load: 42.0%`
pub fn load_percent(v: f64) -> String {
    format!("Load: {v:.1}%")
}

/// `Temp: 27C` (the UPS reports whole degrees; no degree sign on this line)
pub fn ups_temp_celsius(v: f64) -> String {
    format!("Temp: {v:.0}C")
}

/// `Input: 230V`
pub fn input_voltage(v: f64) -> String {
    format!("Input: {v:.0}V")
}

/// `Output: 229V`
pub fn output_voltage(v: f64) -> String {
    format!("Output: {v:.0}V")
}

/// `Amps: 2.4A`
pub fn load_amps(v: f64) -> String {
    format!("Amps: {v:.1}A")
}

/// `Temp: 55°C`
pub fn temp_celsius(v: f64) -> String {
    format!("Temp: {v:.0}°C")
}

/// `Util: 98%`
pub fn util_percent(v: f64) -> String {
    format!("Util: {v:.0}%")
}

/// `Power: 450W`
pub fn power_watts(v: f64) -> String {
    format!("Power: {v:.0}W")
}

/// `Fan: 62%`
pub fn fan_percent(v: f64) -> String {
    format!("Fan: {v:.0}%")
}

/// `Core: 1965` (MHz, unit dropped to fit the column)
pub fn core_clock(v: f64) -> String {
    format!("Core: {v:.0}")
}

/// `Mem: 10502` (MHz, unit dropped to fit the column)
pub fn memory_clock(v: f64) -> String {
    format!("Mem: {v:.0}")
}

/// `Freq: 3.8GHz`, from hertz.
// SAFETY: f64 division by a nonzero constant cannot trap; extreme inputs
// degrade to inf/NaN and render as text.
#[allow(clippy::arithmetic_side_effects)]
pub fn freq_ghz(v: f64) -> String {
    format!("Freq: {:.1}GHz", v / 1e9)
}

/// `Usage: 42%`
pub fn usage_percent(v: f64) -> String {
    format!("Usage: {v:.0}%")
}

/// `Mem: 8G`, from used bytes.
// SAFETY: f64 division by a nonzero constant cannot trap.
#[allow(clippy::arithmetic_side_effects)]
pub fn mem_used_gib(v: f64) -> String {
    format!("Mem: {:.0}G", v / GIB)
}

/// `Disk: 1.5T`, from used bytes.
// SAFETY: f64 division by a nonzero constant cannot trap.
#[allow(clippy::arithmetic_side_effects)]
pub fn disk_used_tib(v: f64) -> String {
    format!("Disk: {:.1}T", v / TIB)
}

/// `Cha.: 1180rpm`
pub fn chassis_fan_rpm(v: f64) -> String {
    format!("Cha.: {v:.0}rpm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_rounds_to_whole_percent() {
        assert_eq!(battery_percent(87.3), "Battery: 87%");
        assert_eq!(battery_percent(100.0), "Battery: 100%");
    }

    #[test]
    fn load_keeps_one_decimal() {
        assert_eq!(load_percent(42.0), "Load: 42.0%");
        assert_eq!(load_percent(7.25), "Load: 7.2%");
    }

    #[test]
    fn temperatures_format_with_and_without_degree_sign() {
        assert_eq!(temp_celsius(55.2), "Temp: 55°C");
        assert_eq!(ups_temp_celsius(27.4), "Temp: 27C");
    }

    #[test]
    fn frequency_converts_hertz_to_gigahertz() {
        assert_eq!(freq_ghz(3_800_000_000.0), "Freq: 3.8GHz");
        assert_eq!(freq_ghz(800_000_000.0), "Freq: 0.8GHz");
    }

    #[test]
    fn memory_converts_used_bytes_to_whole_gib() {
        // 16 GiB total minus 8 GiB available, as used bytes.
        assert_eq!(mem_used_gib(8_589_934_592.0), "Mem: 8G");
    }

    #[test]
    fn disk_converts_used_bytes_to_tib_with_one_decimal() {
        assert_eq!(disk_used_tib(1_649_267_441_664.0), "Disk: 1.5T");
    }

    #[test]
    fn remaining_units_match_the_deployed_dashboard() {
        assert_eq!(runtime_minutes(9.6), "Runtime: 10m");
        assert_eq!(input_voltage(230.2), "Input: 230V");
        assert_eq!(output_voltage(229.0), "Output: 229V");
        assert_eq!(load_amps(2.38), "Amps: 2.4A");
        assert_eq!(util_percent(98.4), "Util: 98%");
        assert_eq!(power_watts(450.2), "Power: 450W");
        assert_eq!(fan_percent(61.8), "Fan: 62%");
        assert_eq!(core_clock(1965.0), "Core: 1965");
        assert_eq!(memory_clock(10_502.0), "Mem: 10502");
        assert_eq!(usage_percent(41.7), "Usage: 42%");
        assert_eq!(chassis_fan_rpm(1180.0), "Cha.: 1180rpm");
    }
}
