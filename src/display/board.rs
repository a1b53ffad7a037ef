use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::config::{TargetConfig, TargetKind};
use crate::types::MonitorError;

use super::targets::{ConsoleTarget, FileTarget, MemoryTarget};
use super::types::{DisplaySink, SharedSink};

/// The set of display targets currently present, keyed by identifier.
#[derive(Default)]
pub struct DisplayBoard {
    sinks: RwLock<HashMap<String, SharedSink>>,
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from configured targets.
    pub fn from_targets(targets: &[TargetConfig]) -> Result<Self, MonitorError> {
        let board = Self::new();
        for target in targets {
            let sink: SharedSink = match target.kind {
                TargetKind::Console => Arc::new(ConsoleTarget::new(target.id.clone())),
                TargetKind::Memory => Arc::new(MemoryTarget::new(target.id.clone())),
                TargetKind::File => {
                    let path = target.path.clone().ok_or_else(|| {
                        MonitorError::Config(format!(
                            "File target `{}` has no path",
                            target.id
                        ))
                    })?;
                    Arc::new(FileTarget::new(target.id.clone(), path))
                }
            };
            board.register(sink);
        }
        Ok(board)
    }

    /// Add a sink, replacing any sink already registered under the same id.
    pub fn register(&self, sink: SharedSink) -> Option<SharedSink> {
        let id = sink.id().to_string();
        self.write().insert(id, sink)
    }

    pub fn unregister(&self, id: &str) -> Option<SharedSink> {
        self.write().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Write `text` into every named target that is present.
    /// Absent targets are skipped. Returns the number of targets written.
    pub async fn apply(&self, targets: &[String], text: &str) -> usize {
        let present: Vec<SharedSink> = {
            let sinks = self.read();
            targets
                .iter()
                .filter_map(|id| sinks.get(id).cloned())
                .collect()
        };

        let mut written = 0;
        for sink in present {
            match sink.set_text(text).await {
                Ok(()) => written += 1,
                Err(err) => warn!(target_id = %sink.id(), error = ?err, "Failed to update display target"),
            }
        }
        written
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, SharedSink>> {
        self.sinks
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, SharedSink>> {
        self.sinks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct BrokenTarget;

    #[async_trait]
    impl DisplaySink for BrokenTarget {
        fn id(&self) -> &str {
            "broken"
        }

        async fn set_text(&self, _text: &str) -> Result<(), MonitorError> {
            Err(MonitorError::Display {
                target: "broken".to_string(),
                message: "detached".to_string(),
            })
        }
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[tokio::test]
    async fn skips_absent_targets() {
        let board = DisplayBoard::new();
        let first = Arc::new(MemoryTarget::new("pending-count"));
        board.register(first.clone());

        let written = board
            .apply(&ids(&["pending-count", "pending-count-2"]), "7")
            .await;

        assert_eq!(written, 1);
        assert_eq!(first.text().as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn empty_board_writes_nothing() {
        let board = DisplayBoard::new();
        assert!(board.is_empty());
        assert_eq!(board.apply(&ids(&["pending-count"]), "1").await, 0);
    }

    #[tokio::test]
    async fn failing_sink_does_not_block_others() {
        let board = DisplayBoard::new();
        let healthy = Arc::new(MemoryTarget::new("pending-count"));
        board.register(Arc::new(BrokenTarget));
        board.register(healthy.clone());

        let written = board.apply(&ids(&["broken", "pending-count"]), "2").await;

        assert_eq!(written, 1);
        assert_eq!(healthy.text().as_deref(), Some("2"));
    }

    #[test]
    fn register_replaces_and_unregister_removes() {
        let board = DisplayBoard::new();
        assert!(board.register(Arc::new(MemoryTarget::new("a"))).is_none());
        assert!(board.register(Arc::new(MemoryTarget::new("a"))).is_some());
        assert_eq!(board.len(), 1);
        assert!(board.unregister("a").is_some());
        assert!(!board.contains("a"));
    }

    #[test]
    fn file_target_requires_path() {
        let targets = vec![TargetConfig {
            id: "bar".to_string(),
            kind: TargetKind::File,
            path: None,
        }];
        assert!(matches!(
            DisplayBoard::from_targets(&targets),
            Err(MonitorError::Config(_))
        ));
    }

    #[test]
    fn builds_board_from_default_config() {
        let config = crate::config::Config::default();
        let board = DisplayBoard::from_targets(&config.targets).unwrap();
        assert!(board.contains("pending-count"));
        assert!(board.contains("pending-count-2"));
    }
}
