//! HTTP API layer for the print queue.
//!
//! Provides the printing endpoints, health and OpenAPI docs.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
