use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use super::Poller;

/// Running schedule started by [`Poller::start_polling`].
/// Dropping the handle stops the schedule as well.
pub struct PollingHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    started: Arc<AtomicU64>,
}

impl Poller {
    /// Tick immediately, then once per `period`. Ticks are independent tasks,
    /// so a slow request never delays the next tick.
    pub fn start_polling(self: Arc<Self>, period: Duration) -> PollingHandle {
        let period = period.max(Duration::from_millis(1));
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let started = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&started);

        info!(interval_ms = period.as_millis() as u64, "Polling started");

        let task = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        counter.fetch_add(1, Ordering::SeqCst);
                        let poller = Arc::clone(&self);
                        in_flight.spawn(async move { poller.tick_best_effort().await });
                    }
                    Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Err(err) = joined {
                            warn!(error = ?err, "Poll tick task failed");
                        }
                    }
                }
            }

            in_flight.shutdown().await;
            info!("Polling stopped");
        });

        PollingHandle {
            stop_tx: Some(stop_tx),
            task,
            started,
        }
    }
}

impl PollingHandle {
    /// Number of ticks launched so far.
    pub fn ticks_started(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    /// Stop the schedule and abort in-flight ticks.
    /// Once this returns no further display writes happen.
    pub async fn stop_polling(mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Err(err) = (&mut self.task).await {
            warn!(error = ?err, "Polling task ended abnormally");
        }
    }
}
