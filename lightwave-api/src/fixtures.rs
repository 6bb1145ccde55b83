//! Canned backend payloads for development builds.
//!
//! When the real backend is unreachable during development, the client
//! substitutes these fixtures so the dashboard still has something to show.
//! Release builds never consult this module at runtime: the original error
//! propagates and the caller keeps its last known state.

use chrono::{Duration, Utc};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;

use crate::{ApiError, HistoryPoint, ModuleInfo, Reading};

/// The fixture current reading: a healthy short LC link at around -8 dBm.
pub fn current_reading() -> Reading {
    Reading {
        timestamp: Utc::now(),
        rx_power_dbm: -8.0,
        temperature_c: Some(41.0),
        voltage_v: Some(3.28),
        bias_ma: Some(26.4),
        signal_quality: "good".to_string(),
        module: ModuleInfo {
            identifier: Some(3),
            ext_identifier: Some(4),
            connector: Some(7),
            encoding: Some(1),
            vendor_name: Some("ACME PHOTONICS".to_string()),
            vendor_pn: Some("AP-8519-3L".to_string()),
            vendor_rev: Some("A".to_string()),
            cc_base_valid: Some(true),
        },
    }
}

/// The fixture backfill: a short tail of samples hovering near the
/// fixture reading, most recent last, one point per poll period.
pub fn history_points() -> Vec<HistoryPoint> {
    let now = Utc::now();
    let values = [-8.21, -8.05, -7.98, -8.12, -8.0];
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| HistoryPoint {
            timestamp: now - Duration::seconds(2 * (values.len() - i) as i64),
            rx_power_dbm: Some(v),
        })
        .collect()
}

/// Substitute a fixture for a failed fetch, keyed by a substring of the
/// requested path. Only `current` and `history` have fixtures; anything
/// else (and every release build) propagates the original error.
pub fn resolve<T: DeserializeOwned>(path: &str, err: ApiError) -> Result<T, ApiError> {
    if !cfg!(debug_assertions) {
        return Err(err);
    }

    let payload = if path.contains("current") {
        json!(current_reading())
    } else if path.contains("history") {
        json!(history_points())
    } else {
        return Err(err);
    };

    warn!("fetch of {path} failed ({err}); falling back to fixture data");
    serde_json::from_value(payload).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        source: e,
    })
}
