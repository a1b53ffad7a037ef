use async_trait::async_trait;

use crate::types::{PendingCount, PollFailure};

/// Anything that can produce the current pending count.
#[async_trait]
pub trait PendingSource: Send + Sync {
    async fn fetch(&self) -> Result<PendingCount, PollFailure>;
}
