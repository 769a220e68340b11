//! Category resolution for palette widget types.
//!
//! `WidgetKind` decides the default size class from an enumerated keyword list;
//! `CategoryTable` is the static color configuration handed in by the host.

mod core;
mod kind;

pub use self::core::{Category, CategoryRule, CategoryTable};
pub use kind::WidgetKind;
