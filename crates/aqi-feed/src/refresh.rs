// File: crates/aqi-feed/src/refresh.rs
// Summary: Periodic city-list refresh on a tokio interval, published through a watch channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::fallback::{Feed, Sourced};
use crate::reading::CityReading;

/// Default refresh period (5 minutes).
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(300);

pub type CitySnapshotRx = watch::Receiver<Option<Sourced<Vec<CityReading>>>>;

/// Background task re-running the city fetch/fallback path every `period`.
/// The first refresh happens immediately. The loop only ends through abort,
/// on `shutdown` or drop.
pub struct Refresher {
    rx: CitySnapshotRx,
    handle: JoinHandle<()>,
}

impl Refresher {
    /// Spawn onto the current tokio runtime.
    pub fn spawn(feed: Arc<Feed>, period: Duration) -> Self {
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let readings = feed.city_readings().await;
                log::info!("refreshed {} cities ({})", readings.data.len(), readings.source);
                tx.send_replace(Some(readings));
            }
        });
        Self { rx, handle }
    }

    /// A receiver that sees every subsequent refresh.
    pub fn subscribe(&self) -> CitySnapshotRx {
        self.rx.clone()
    }

    /// Most recent refresh, if one has completed.
    pub fn latest(&self) -> Option<Sourced<Vec<CityReading>>> {
        self.rx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel the timer. Receivers observe the channel closing.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::Source;
    use aqi_core::{CityTable, SeasonPolicy};

    fn offline_feed() -> Arc<Feed> {
        Arc::new(Feed::offline(Arc::new(CityTable::builtin().unwrap()), SeasonPolicy::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_on_the_interval() {
        let r = Refresher::spawn(offline_feed(), Duration::from_secs(300));
        let mut rx = r.subscribe();

        rx.changed().await.unwrap();
        let first = rx.borrow_and_update().clone().unwrap();
        assert_eq!(first.source, Source::Synthetic);
        assert_eq!(first.data.len(), 25);

        // next refresh arrives only after a full period
        tokio::time::advance(Duration::from_secs(299)).await;
        assert!(!rx.has_changed().unwrap());
        tokio::time::advance(Duration::from_secs(2)).await;
        rx.changed().await.unwrap();
        assert!(r.latest().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_refreshing_without_subscribers() {
        let r = Refresher::spawn(offline_feed(), Duration::from_secs(300));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(r.latest().is_some());

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert!(r.is_running());
        r.shutdown();
    }

    #[tokio::test]
    async fn shutdown_closes_the_channel() {
        let r = Refresher::spawn(offline_feed(), Duration::from_secs(3600));
        let mut rx = r.subscribe();
        rx.changed().await.unwrap();
        let _ = rx.borrow_and_update();

        r.shutdown();
        let closed = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await.expect("no hang");
        assert!(closed.is_err());
        assert!(!r.is_running());
    }
}
