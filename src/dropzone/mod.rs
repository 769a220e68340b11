//! Append drops from the widget palette into a zone.

mod core;
mod payload;

pub use self::core::{DropIgnored, DropOutcome, DropZoneController};
pub use payload::{DEFAULT_WIDGET_NAME, PalettePayload};
