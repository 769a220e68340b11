use crate::category::{CategoryTable, WidgetKind};
use crate::collection::WidgetCollection;
use crate::widget::{IdGenerator, Widget, WidgetId, Zone};

use super::payload::{DEFAULT_WIDGET_NAME, PalettePayload};

/// Why a palette drop did not create a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIgnored {
    WidgetModeDisabled,
    /// A reorder session owns the pointer.
    ReorderActive,
    /// The payload refers to a widget already on the board.
    ExistingWidget,
}

impl DropIgnored {
    pub fn as_str(self) -> &'static str {
        match self {
            DropIgnored::WidgetModeDisabled => "widget_mode_disabled",
            DropIgnored::ReorderActive => "reorder_active",
            DropIgnored::ExistingWidget => "existing_widget",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Added(WidgetId),
    Ignored(DropIgnored),
}

impl DropOutcome {
    pub fn added(&self) -> Option<&WidgetId> {
        match self {
            DropOutcome::Added(id) => Some(id),
            DropOutcome::Ignored(_) => None,
        }
    }
}

/// Append target shared by the `Above` and `Below` zones.
#[derive(Debug)]
pub struct DropZoneController {
    enabled: bool,
    highlighted: Option<Zone>,
    default_name: String,
}

impl Default for DropZoneController {
    fn default() -> Self {
        Self::new(DEFAULT_WIDGET_NAME)
    }
}

impl DropZoneController {
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            enabled: true,
            highlighted: None,
            default_name: default_name.into(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning widget mode off also clears any highlight.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.highlighted = None;
        }
    }

    pub fn set_default_name(&mut self, name: impl Into<String>) {
        self.default_name = name.into();
    }

    pub fn highlighted(&self) -> Option<Zone> {
        self.highlighted
    }

    /// Palette item entered a zone. Returns whether the highlight was taken.
    pub fn drag_over(&mut self, zone: Zone, reorder_active: bool) -> bool {
        if !self.enabled || reorder_active {
            return false;
        }
        self.highlighted = Some(zone);
        true
    }

    /// Palette item left the zones. Ignored under the same gate as `drag_over`.
    pub fn drag_leave(&mut self, reorder_active: bool) -> bool {
        if !self.enabled || reorder_active {
            return false;
        }
        self.highlighted = None;
        true
    }

    pub fn handle_drop(
        &mut self,
        zone: Zone,
        raw: &str,
        reorder_active: bool,
        collection: &mut WidgetCollection,
        table: &CategoryTable,
        ids: &mut dyn IdGenerator,
    ) -> DropOutcome {
        // Every drop ends the palette gesture, accepted or not.
        self.highlighted = None;
        if !self.enabled {
            return DropOutcome::Ignored(DropIgnored::WidgetModeDisabled);
        }
        if reorder_active {
            return DropOutcome::Ignored(DropIgnored::ReorderActive);
        }

        let payload = PalettePayload::parse(raw, &self.default_name);
        if refers_to_existing(&payload, collection) {
            return DropOutcome::Ignored(DropIgnored::ExistingWidget);
        }

        let category = table.resolve(&payload.name);
        let size = WidgetKind::classify(&payload.name).default_size();
        let id = ids.next_id();
        let widget = Widget::new(
            id.clone(),
            payload.name.clone(),
            payload.name,
            zone,
            size,
            &category,
        );
        collection.add(widget);
        DropOutcome::Added(id)
    }
}

fn refers_to_existing(payload: &PalettePayload, collection: &WidgetCollection) -> bool {
    let by_id = payload
        .id
        .as_deref()
        .is_some_and(|id| collection.contains(&WidgetId::new(id)));
    by_id || (!payload.raw.is_empty() && collection.contains(&WidgetId::new(payload.raw.as_str())))
}
