mod schedule;

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::display::DisplayBoard;
use crate::pending_client::PendingSource;
use crate::types::{PendingCount, PollFailure};

pub use schedule::PollingHandle;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Periodically mirrors the server's pending count into display targets.
pub struct Poller {
    source: Arc<dyn PendingSource>,
    board: Arc<DisplayBoard>,
    targets: Vec<String>,
}

impl Poller {
    pub fn new(
        source: Arc<dyn PendingSource>,
        board: Arc<DisplayBoard>,
        targets: Vec<String>,
    ) -> Self {
        Self {
            source,
            board,
            targets,
        }
    }

    pub fn board(&self) -> &Arc<DisplayBoard> {
        &self.board
    }

    /// Fetch once and write the count into every present target.
    /// On failure no target is touched.
    pub async fn tick(&self) -> Result<PendingCount, PollFailure> {
        let count = self.source.fetch().await?;
        self.board.apply(&self.targets, &count.to_string()).await;
        Ok(count)
    }

    /// Scheduler-facing tick: failures end here and wait for the next interval.
    pub async fn tick_best_effort(&self) {
        if let Err(err) = self.tick().await {
            debug!(error = %err, "Pending count poll failed");
        }
    }
}
