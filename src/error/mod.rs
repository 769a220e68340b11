//! Error surface for the fallible edges of the crate.
//!
//! Board operations themselves never fail; only configuration loading and
//! preview output can.

mod types;

pub use types::{BoardError, Result};
