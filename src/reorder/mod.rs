//! Drag session handling for widgets that are already placed.

mod core;

pub use self::core::{DragCommand, DragState, ReorderController, ReorderOutcome, Side};
