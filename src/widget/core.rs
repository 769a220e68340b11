use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Session-unique widget identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl PartialEq<str> for WidgetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WidgetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One of the two independently ordered regions around the primary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Above,
    Below,
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::Above, Zone::Below];

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Above => "above",
            Zone::Below => "below",
        }
    }
}

/// Size class of a widget; determines how many of the 3 row columns it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

impl WidgetSize {
    pub const fn span(self) -> u8 {
        match self {
            WidgetSize::Small => 1,
            WidgetSize::Medium => 2,
            WidgetSize::Large => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        }
    }
}

/// A content block placed in one of the zones.
///
/// The category is resolved once when the widget is built and has no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    id: WidgetId,
    #[serde(rename = "type")]
    kind_name: String,
    name: String,
    content: String,
    zone: Zone,
    size: WidgetSize,
    category_id: String,
    category_color: String,
}

impl Widget {
    pub fn new(
        id: WidgetId,
        kind_name: impl Into<String>,
        name: impl Into<String>,
        zone: Zone,
        size: WidgetSize,
        category: &Category,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            kind_name: kind_name.into(),
            content: format!("{name} Widget Content"),
            name,
            zone,
            size,
            category_id: category.category_id.clone(),
            category_color: category.color_hex.clone(),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// The palette type string the widget was created from.
    pub fn kind_name(&self) -> &str {
        &self.kind_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn size(&self) -> WidgetSize {
        self.size
    }

    pub fn span(&self) -> u8 {
        self.size.span()
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn category_color(&self) -> &str {
        &self.category_color
    }

    pub(crate) fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    pub(crate) fn set_size(&mut self, size: WidgetSize) {
        self.size = size;
    }
}
