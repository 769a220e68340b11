//! Board composition root: owns the collection and routes input events to
//! the drop zone and reorder controllers.

mod config;
mod core;

pub use self::config::BoardConfig;
pub use self::core::{Board, BoardEvent, BoardOutcome};
