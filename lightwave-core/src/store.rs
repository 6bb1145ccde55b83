use std::sync::Mutex;

use chrono::{DateTime, Utc};
use lightwave_api::Reading;
use serde::Serialize;
use tokio::sync::watch;

use crate::history::HistoryBuffer;

/// Everything a consumer needs for one render pass, cloned in one go so a
/// reader never sees the history updated without the matching reading.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub latest: Option<Reading>,
    pub history: Vec<f64>,
    /// When the last successful poll cycle committed. A failed cycle
    /// leaves this untouched, so consumers can flag stale data.
    pub last_updated: Option<DateTime<Utc>>,
}

struct StoreInner {
    latest: Option<Reading>,
    history: HistoryBuffer,
    last_updated: Option<DateTime<Utc>>,
}

/// The shared telemetry state: last full reading plus the rolling power
/// window. The sync engine is the only writer; consumers take snapshots
/// and can await change notifications.
pub struct TelemetryStore {
    inner: Mutex<StoreInner>,
    // Bumped once per commit. Receivers only care that it changed.
    version_tx: watch::Sender<u64>,
}

impl std::fmt::Debug for TelemetryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryStore").finish()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl TelemetryStore {
    pub fn new(capacity: usize) -> Self {
        let (version_tx, _) = watch::channel(0);
        Self {
            inner: Mutex::new(StoreInner {
                latest: None,
                history: HistoryBuffer::new(capacity),
                last_updated: None,
            }),
            version_tx,
        }
    }

    /// Commit one successful poll cycle: normalize the reading, update the
    /// cache, then append the power sample to the rolling window. The cache
    /// update happens before the append, inside one lock scope, so no
    /// reader observes one without the other.
    pub fn commit(&self, reading: Reading) {
        let reading = normalize(reading);
        let power = reading.rx_power_dbm;
        {
            let mut inner = self.inner.lock().unwrap();
            inner.last_updated = Some(reading.timestamp);
            inner.latest = Some(reading);
            inner.history.append(power);
        }
        self.notify();
    }

    /// Seed the rolling window from the one-time backfill, truncated to
    /// the last `capacity` values. An empty backfill is a no-op.
    pub fn seed_history(&self, values: Vec<f64>) {
        if values.is_empty() {
            return;
        }
        self.inner.lock().unwrap().history.replace(values);
        self.notify();
    }

    /// Clone of the most recent reading, if any cycle has succeeded yet.
    pub fn latest(&self) -> Option<Reading> {
        self.inner.lock().unwrap().latest.clone()
    }

    /// Ordered copy of the rolling power window, oldest first.
    pub fn history(&self) -> Vec<f64> {
        self.inner.lock().unwrap().history.snapshot()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().unwrap().last_updated
    }

    /// Whole-state snapshot for one render pass.
    pub fn snapshot(&self) -> StoreSnapshot {
        let inner = self.inner.lock().unwrap();
        StoreSnapshot {
            latest: inner.latest.clone(),
            history: inner.history.snapshot(),
            last_updated: inner.last_updated,
        }
    }

    /// Change notifications. The watch value is a commit counter; await
    /// `changed()` and re-snapshot rather than reading the counter itself.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version_tx.subscribe()
    }

    /// Current commit counter, mostly useful in tests.
    pub fn version(&self) -> u64 {
        *self.version_tx.borrow()
    }

    fn notify(&self) {
        self.version_tx.send_modify(|v| *v += 1);
    }
}

/// Round the stored fields the way the dashboard displays them: power and
/// electrical values to 2 decimals, temperature to the nearest degree.
/// Missing optionals stay missing; substituting dashes is the consumer's
/// business, not the store's.
fn normalize(mut reading: Reading) -> Reading {
    reading.rx_power_dbm = round2(reading.rx_power_dbm);
    reading.voltage_v = reading.voltage_v.map(round2);
    reading.bias_ma = reading.bias_ma.map(round2);
    reading.temperature_c = reading.temperature_c.map(f64::round);
    reading
}
