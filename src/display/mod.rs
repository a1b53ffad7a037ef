//! Display targets the pending count is mirrored into.

mod board;
mod targets;
mod types;

pub use board::DisplayBoard;
pub use targets::{ConsoleTarget, FileTarget, MemoryTarget};
pub use types::{DisplaySink, SharedSink};
