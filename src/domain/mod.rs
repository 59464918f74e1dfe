//! Domain types for the print queue.
//!
//! This module contains the printing case record and its status.

mod case;

pub use case::*;
