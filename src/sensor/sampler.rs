//! Background sensor refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::sensor::Accelerometer;
use crate::sensor::tracker::AngleTracker;

/// Keeps the tracker's cached delta fresh even when no client is asking.
///
/// A failed background read is absorbed silently; the next successful read,
/// background or on-demand, heals the cache.
pub async fn run<A: Accelerometer>(tracker: Arc<Mutex<AngleTracker<A>>>, period: Duration) {
    let mut ticker = tokio::time::interval(period);

    loop {
        ticker.tick().await;
        if let Err(e) = tracker.lock().await.delta().await {
            tracing::debug!("background sample failed: {e}");
        }
    }
}
