//! Mirrors a server's pending-request count into display targets.

pub mod config;
pub mod display;
pub mod pending_client;
pub mod poller;
pub mod types;

pub use types::{MonitorError, PendingCount, PollFailure};
