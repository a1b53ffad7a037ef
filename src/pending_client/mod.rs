mod api;
mod client;
mod helpers;
mod source;

pub use client::PendingClient;
pub use source::PendingSource;
