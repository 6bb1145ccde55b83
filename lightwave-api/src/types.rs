use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity snapshot of the attached transceiver, as reported alongside
/// every reading. Fields the module EEPROM leaves blank arrive as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub identifier: Option<u8>,
    pub ext_identifier: Option<u8>,
    pub connector: Option<u8>,
    pub encoding: Option<u8>,
    pub vendor_name: Option<String>,
    pub vendor_pn: Option<String>,
    pub vendor_rev: Option<String>,
    pub cc_base_valid: Option<bool>,
}

/// One full telemetry snapshot from `GET /api/v1/current`.
/// Immutable once stored; the next successful fetch supersedes it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub rx_power_dbm: f64,
    pub temperature_c: Option<f64>,
    pub voltage_v: Option<f64>,
    pub bias_ma: Option<f64>,
    pub signal_quality: String,
    pub module: ModuleInfo,
}

/// One point from the backfill endpoint. Points with no power value are
/// dropped before they reach the rolling history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub rx_power_dbm: Option<f64>,
}

/// Static identity data from `GET /api/static` (the A0h page).
/// Consumed by the info view outside the sync core; fetched on demand,
/// never polled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleStaticData {
    pub identifier: Option<u8>,
    pub identifier_type: Option<String>,
    pub ext_identifier: Option<u8>,
    pub connector: Option<u8>,
    pub connector_type: Option<String>,
    pub encoding: Option<u8>,
    pub nominal_rate_mbd: Option<u32>,
    pub wavelength_nm: Option<u32>,
    pub vendor_name: Option<String>,
    pub vendor_oui: Option<Vec<u8>>,
    pub vendor_pn: Option<String>,
    pub vendor_rev: Option<String>,
    pub cc_base_valid: Option<bool>,
}
