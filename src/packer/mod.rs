//! Row packing for a single zone.
//!
//! Downstream code reads rows through [`Row`]; the range form is what the
//! collection caches between mutations.

mod core;

pub use self::core::{ROW_BUDGET, Row, pack_ranges, pack_rows};
