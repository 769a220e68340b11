//! Ordered per-zone widget storage.
//!
//! Each mutation repacks the zones it touched before returning, so readers
//! never observe stale rows.

mod core;

pub use self::core::{MoveOutcome, WidgetCollection};
