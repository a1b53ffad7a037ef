use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Local;
use tokio::fs;

use crate::types::MonitorError;

use super::types::DisplaySink;

/// Keeps the last written text in memory.
#[derive(Debug)]
pub struct MemoryTarget {
    id: String,
    text: Mutex<Option<String>>,
}

impl MemoryTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Mutex::new(None),
        }
    }

    pub fn with_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Mutex::new(Some(text.into())),
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl DisplaySink for MemoryTarget {
    fn id(&self) -> &str {
        &self.id
    }

    async fn set_text(&self, text: &str) -> Result<(), MonitorError> {
        *self
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
        Ok(())
    }
}

/// Prints each update to stdout.
#[derive(Debug)]
pub struct ConsoleTarget {
    id: String,
}

impl ConsoleTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub(crate) fn render(&self, text: &str) -> String {
        format!("[{}] {}: {}", Local::now().format("%H:%M:%S"), self.id, text)
    }

    fn write_line<W: Write>(&self, out: &mut W, text: &str) -> Result<(), MonitorError> {
        writeln!(out, "{}", self.render(text))?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl DisplaySink for ConsoleTarget {
    fn id(&self) -> &str {
        &self.id
    }

    async fn set_text(&self, text: &str) -> Result<(), MonitorError> {
        self.write_line(&mut io::stdout().lock(), text)
    }
}

/// Replaces the content of a file, e.g. for a status bar to read.
#[derive(Debug)]
pub struct FileTarget {
    id: String,
    path: PathBuf,
}

impl FileTarget {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn failure(&self, message: String) -> MonitorError {
        MonitorError::Display {
            target: self.id.clone(),
            message,
        }
    }
}

#[async_trait]
impl DisplaySink for FileTarget {
    fn id(&self) -> &str {
        &self.id
    }

    async fn set_text(&self, text: &str) -> Result<(), MonitorError> {
        let staging = self.staging_path();
        fs::write(&staging, text)
            .await
            .map_err(|err| self.failure(format!("write {}: {err}", staging.display())))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|err| self.failure(format!("rename to {}: {err}", self.path.display())))?;
        Ok(())
    }
}
