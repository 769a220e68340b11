//! Plain-text preview of packed zones.
//!
//! Each widget occupies `span * column_width` cells of its row, rows stack
//! vertically, and the primary content placeholder sits between the zones.

mod core;

pub use self::core::{GridPreview, display_width};
