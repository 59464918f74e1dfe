//! Storage layer for the print queue.
//!
//! Handlers depend on the [`CaseStore`] trait; the only backend is in memory.

mod memory;
mod store;

pub use memory::InMemoryCaseStore;
pub use store::{CaseStore, MarkOutcome};
