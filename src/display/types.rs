use std::sync::Arc;

use async_trait::async_trait;

use crate::types::MonitorError;

/// A UI element whose visible text can be replaced.
#[async_trait]
pub trait DisplaySink: Send + Sync {
    fn id(&self) -> &str;

    async fn set_text(&self, text: &str) -> Result<(), MonitorError>;
}

pub type SharedSink = Arc<dyn DisplaySink>;
