//! Durable per-user history of successful weather lookups.

pub mod store;

pub use store::{HistoryEntry, HistoryStore};
