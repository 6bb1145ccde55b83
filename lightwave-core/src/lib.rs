pub mod history;
pub mod range;
pub mod store;
pub mod sync;
pub mod units;

// Re-export the main types so consumers can just use `lightwave_core::TelemetryStore`
pub use history::HistoryBuffer;
pub use range::{AxisDomain, axis_domain};
pub use store::{StoreSnapshot, TelemetryStore};
pub use sync::{DEFAULT_HISTORY_CAPACITY, DEFAULT_POLL_PERIOD, SyncConfig, SyncHandle, start};
pub use units::{PowerUnit, UnitError, convert, dbm_to_mw, mw_to_dbm};

// Re-export the wire types for consumers that don't need the client itself
pub use lightwave_api::{HistoryPoint, ModuleInfo, Reading};
