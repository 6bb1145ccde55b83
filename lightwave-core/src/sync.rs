use std::sync::Arc;
use std::time::Duration;

use lightwave_api::TelemetrySource;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::store::TelemetryStore;

/// How many samples the rolling window holds: 30 points at the 2 s poll
/// period is a one-minute trend.
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub period: Duration,
    pub history_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_POLL_PERIOD,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// The engine's lifecycle: backfill has not run yet, or live polling is
/// underway. The transition happens exactly once, whether or not the
/// backfill succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    Uninitialized,
    Running,
}

enum SyncCommand {
    Stop,
}

/// Handle to a running sync engine. Dropping it without calling `stop()`
/// also halts the loop, since the command channel closes.
pub struct SyncHandle {
    cmd_tx: mpsc::Sender<SyncCommand>,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for SyncHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncHandle").finish()
    }
}

impl SyncHandle {
    /// Halt the polling loop and wait for it to wind down. Deterministic:
    /// after this returns, no further fetch will be issued.
    pub async fn stop(self) {
        let _ = self.cmd_tx.send(SyncCommand::Stop).await;
        let _ = self.task.await;
    }
}

/// Start the telemetry sync engine in a background task.
///
/// The first cycle backfills the rolling window from the history endpoint,
/// then every cycle fetches the current reading and commits it to the
/// store. A cycle runs to completion before the next tick is honored, and
/// missed ticks are skipped, so cycles never overlap or apply out of
/// order. A failed cycle leaves the store exactly as it was.
pub fn start(
    source: Arc<dyn TelemetrySource>,
    store: Arc<TelemetryStore>,
    config: SyncConfig,
) -> SyncHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel(4);

    let task = tokio::spawn(async move {
        info!(
            period_ms = config.period.as_millis() as u64,
            capacity = config.history_capacity,
            "telemetry sync started"
        );

        let mut state = SyncState::Uninitialized;
        let mut ticker = tokio::time::interval(config.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    Some(SyncCommand::Stop) | None => break,
                },
                _ = ticker.tick() => {
                    if state == SyncState::Uninitialized {
                        backfill(source.as_ref(), &store, config.history_capacity).await;
                        state = SyncState::Running;
                    }
                    poll_once(source.as_ref(), &store).await;
                }
            }
        }

        info!("telemetry sync stopped");
    });

    SyncHandle { cmd_tx, task }
}

/// One-time seed of the rolling window. Failure is logged and forgotten:
/// the window just starts empty and fills from live polling.
async fn backfill(source: &dyn TelemetrySource, store: &TelemetryStore, capacity: usize) {
    match source.history(capacity).await {
        Ok(points) => {
            let values: Vec<f64> = points.into_iter().filter_map(|p| p.rx_power_dbm).collect();
            debug!(points = values.len(), "history backfill");
            store.seed_history(values);
        }
        Err(err) => {
            warn!("history backfill failed, starting with an empty window: {err}");
        }
    }
}

/// One live poll cycle. On failure the store keeps the last good snapshot;
/// nothing surfaces past this function.
async fn poll_once(source: &dyn TelemetrySource, store: &TelemetryStore) {
    match source.current().await {
        Ok(reading) => store.commit(reading),
        Err(err) => {
            warn!("poll cycle failed, keeping last known state: {err}");
        }
    }
}
