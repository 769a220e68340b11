//! Widget records and the id generators used to mint them.

mod core;
pub mod id;

pub use self::core::{Widget, WidgetId, WidgetSize, Zone};
pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
