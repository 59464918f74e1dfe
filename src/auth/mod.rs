//! Authentication module for the print queue API.
//!
//! Every printing route is gated by a single shared API key sent as
//! `Authorization: Bearer <key>`.

mod api_key;
mod middleware;

pub use api_key::*;
pub use middleware::*;
