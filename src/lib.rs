//! Arrangement engine for the page-builder widget zones.
//!
//! Widgets dropped from a palette land in one of two zones around the primary
//! content area, get packed into rows of a 3-column grid, and can be reordered
//! with position-aware drag and drop. The modules follow the same
//! `mod.rs` + `core.rs` split used across the crate so the public surface stays
//! in one place.

pub mod board;
pub mod category;
pub mod collection;
pub mod dropzone;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod packer;
pub mod render;
pub mod reorder;
pub mod widget;

pub use board::{Board, BoardConfig, BoardEvent, BoardOutcome};
pub use category::{Category, CategoryRule, CategoryTable, WidgetKind};
pub use collection::{MoveOutcome, WidgetCollection};
pub use dropzone::{DEFAULT_WIDGET_NAME, DropIgnored, DropOutcome, DropZoneController, PalettePayload};
pub use error::{BoardError, Result};
pub use geometry::Rect;
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{BoardMetrics, MetricSnapshot};
pub use packer::{ROW_BUDGET, Row, pack_ranges, pack_rows};
pub use render::{GridPreview, display_width};
pub use reorder::{DragCommand, DragState, ReorderController, ReorderOutcome, Side};
pub use widget::{
    IdGenerator, SequentialIdGenerator, TimestampIdGenerator, Widget, WidgetId, WidgetSize, Zone,
};
