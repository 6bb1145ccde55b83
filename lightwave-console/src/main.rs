use std::sync::Arc;

use lightwave_api::ApiClient;
use lightwave_core::{PowerUnit, SyncConfig, TelemetryStore, axis_domain};

use lightwave_console::display;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("LIGHTWAVE_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    eprintln!("=== Lightwave Console — {base_url} ===");

    let config = SyncConfig::default();
    let client = Arc::new(ApiClient::new(&base_url));
    let store = Arc::new(TelemetryStore::new(config.history_capacity));

    let handle = lightwave_core::start(client, store.clone(), config);
    let mut changes = store.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = store.snapshot();
                if let Some(reading) = &snapshot.latest {
                    println!("{}", display::format_reading(reading, PowerUnit::DBm));
                    println!("{}", display::format_domain(axis_domain(&snapshot.history)));
                }
            }
        }
    }

    handle.stop().await;
    Ok(())
}
