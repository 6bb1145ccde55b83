//! Value formatting for the console readout.
//!
//! The store keeps missing fields as `None`; the dash sentinels and the
//! per-unit decimal rules live here, on the presentation side.

use lightwave_api::Reading;
use lightwave_core::{AxisDomain, PowerUnit, convert};

/// Shown for fields the module did not report.
pub const PLACEHOLDER: &str = "—";

/// Render a power value (stored in dBm) in the selected display unit.
/// Decimal places follow the dashboard rules: whole nanowatts, four places
/// for milliwatts, two for everything else. A conversion that falls
/// outside the unit's domain renders as "N/A".
pub fn format_power(rx_power_dbm: f64, unit: PowerUnit, reference_db: f64) -> String {
    match convert(rx_power_dbm, PowerUnit::DBm, unit, reference_db) {
        Ok(value) => match unit {
            PowerUnit::NanoWatt => format!("{value:.0} {}", unit.label()),
            PowerUnit::MilliWatt => format!("{value:.4} {}", unit.label()),
            _ => format!("{value:.2} {}", unit.label()),
        },
        Err(_) => "N/A".to_string(),
    }
}

/// Temperature to the nearest degree, or the placeholder when absent.
pub fn format_temperature(temperature_c: Option<f64>) -> String {
    match temperature_c {
        Some(t) => format!("{:.0} °C", t.round()),
        None => PLACEHOLDER.to_string(),
    }
}

/// Bias current in mA; an unreported value reads as zero.
pub fn format_bias(bias_ma: Option<f64>) -> String {
    format!("{:.2} mA", bias_ma.unwrap_or(0.0))
}

/// Supply voltage in V; an unreported value reads as zero.
pub fn format_voltage(voltage_v: Option<f64>) -> String {
    format!("{:.2} V", voltage_v.unwrap_or(0.0))
}

pub fn format_signal_quality(signal_quality: &str) -> String {
    if signal_quality.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        signal_quality.to_string()
    }
}

/// One readout line for the latest snapshot.
pub fn format_reading(reading: &Reading, unit: PowerUnit) -> String {
    format!(
        "rx {}  temp {}  bias {}  vcc {}  signal {}",
        format_power(reading.rx_power_dbm, unit, 0.0),
        format_temperature(reading.temperature_c),
        format_bias(reading.bias_ma),
        format_voltage(reading.voltage_v),
        format_signal_quality(&reading.signal_quality),
    )
}

/// Chart bounds line for the trend window.
pub fn format_domain(domain: AxisDomain) -> String {
    format!("axis {:.1} .. {:.1} dBm", domain.top, domain.bottom)
}
