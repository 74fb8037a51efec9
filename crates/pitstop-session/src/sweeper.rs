//! Periodic background cleanup, independent of request traffic.

use std::sync::Arc;
use std::time::Duration;

use pitstop_core::config::SessionConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::store::SessionStore;

/// Handle to a running sweeper task.
///
/// Dropping the handle also stops the sweeper, since the task exits once the
/// shutdown channel closes.
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop and wait for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a task running `store.cleanup(ttl)` every `interval`.
///
/// Must be called from within a tokio runtime. The first sweep happens one
/// full interval after spawning.
pub fn spawn_sweeper(
    store: Arc<SessionStore>,
    interval: Duration,
    ttl: chrono::Duration,
) -> SweeperHandle {
    let (shutdown, mut stop) = watch::channel(false);
    let period = interval.max(Duration::from_millis(1));

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        info!(interval_ms = period.as_millis() as u64, "session sweeper started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.cleanup(ttl);
                    debug!(removed, live = store.session_count(), "sweep finished");
                }
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
            }
        }
        info!("session sweeper stopped");
    });

    SweeperHandle { shutdown, task }
}

/// [`spawn_sweeper`] with the interval and TTL from configuration.
pub fn spawn_sweeper_from_config(store: Arc<SessionStore>, config: &SessionConfig) -> SweeperHandle {
    spawn_sweeper(store, config.cleanup_interval(), config.ttl())
}
