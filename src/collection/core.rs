use std::ops::Range;

use blake3::Hash;

use crate::packer::{Row, pack_ranges};
use crate::reorder::Side;
use crate::widget::{Widget, WidgetId, WidgetSize, Zone};

/// Result of [`WidgetCollection::move_widget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Zone, to: Zone, index: usize },
    SameWidget,
    UnknownTarget,
    UnknownWidget,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

#[derive(Debug, Default, Clone)]
struct Lane {
    widgets: Vec<Widget>,
    rows: Vec<Range<usize>>,
}

impl Lane {
    fn repack(&mut self) {
        self.rows = pack_ranges(&self.widgets);
    }

    fn position(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }
}

/// In-memory widget list split into the `Above` and `Below` zones.
#[derive(Debug, Default, Clone)]
pub struct WidgetCollection {
    above: Lane,
    below: Lane,
    repacks: u64,
}

impl WidgetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end of the widget's zone. Identical widgets are not merged.
    pub fn add(&mut self, widget: Widget) {
        let zone = widget.zone();
        self.lane_mut(zone).widgets.push(widget);
        self.repack(zone);
    }

    pub fn remove(&mut self, id: &WidgetId) -> Option<Widget> {
        let (zone, idx) = self.locate(id)?;
        let removed = self.lane_mut(zone).widgets.remove(idx);
        self.repack(zone);
        Some(removed)
    }

    /// Change the size class in place. Returns `false` for an unknown id.
    pub fn resize(&mut self, id: &WidgetId, size: WidgetSize) -> bool {
        let Some((zone, idx)) = self.locate(id) else {
            return false;
        };
        self.lane_mut(zone).widgets[idx].set_size(size);
        self.repack(zone);
        true
    }

    /// Re-insert `dragged` next to `target`, adopting the target's zone.
    ///
    /// Leaves the collection untouched unless both ids exist and differ.
    pub fn move_widget(&mut self, dragged: &WidgetId, target: &WidgetId, side: Side) -> MoveOutcome {
        if dragged == target {
            return MoveOutcome::SameWidget;
        }
        if self.locate(target).is_none() {
            return MoveOutcome::UnknownTarget;
        }
        let Some((from, from_idx)) = self.locate(dragged) else {
            return MoveOutcome::UnknownWidget;
        };

        let mut widget = self.lane_mut(from).widgets.remove(from_idx);

        // Target index shifts once the dragged widget is out of the lane.
        let Some((to, target_idx)) = self.locate(target) else {
            self.lane_mut(from).widgets.insert(from_idx, widget);
            return MoveOutcome::UnknownTarget;
        };
        let index = match side {
            Side::Left => target_idx,
            Side::Right => target_idx + 1,
        };

        widget.set_zone(to);
        self.lane_mut(to).widgets.insert(index, widget);

        self.repack(from);
        if from != to {
            self.repack(to);
        }

        MoveOutcome::Moved { from, to, index }
    }

    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.locate(id)
            .map(|(zone, idx)| &self.lane(zone).widgets[idx])
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.locate(id).is_some()
    }

    pub fn zone_of(&self, id: &WidgetId) -> Option<Zone> {
        self.locate(id).map(|(zone, _)| zone)
    }

    pub fn widgets(&self, zone: Zone) -> &[Widget] {
        &self.lane(zone).widgets
    }

    /// Packed rows for a zone, as of the latest mutation.
    pub fn rows(&self, zone: Zone) -> Vec<Row<'_>> {
        let lane = self.lane(zone);
        lane.rows
            .iter()
            .map(|range| Row::new(&lane.widgets[range.clone()]))
            .collect()
    }

    /// All widgets, `Above` first, each zone in order.
    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.above.widgets.iter().chain(self.below.widgets.iter())
    }

    pub fn len(&self) -> usize {
        self.above.widgets.len() + self.below.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of zone repacks performed since construction.
    pub fn repack_count(&self) -> u64 {
        self.repacks
    }

    /// Content hash of both zones, order included.
    pub fn fingerprint(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        for zone in Zone::ALL {
            hasher.update(zone.as_str().as_bytes());
            hasher.update(&[0xff]);
            for widget in self.widgets(zone) {
                for field in [
                    widget.id().as_str(),
                    widget.kind_name(),
                    widget.name(),
                    widget.content(),
                    widget.zone().as_str(),
                    widget.size().as_str(),
                    widget.category_id(),
                    widget.category_color(),
                ] {
                    hasher.update(field.as_bytes());
                    hasher.update(&[0]);
                }
            }
        }
        hasher.finalize()
    }

    fn locate(&self, id: &WidgetId) -> Option<(Zone, usize)> {
        Zone::ALL
            .into_iter()
            .find_map(|zone| self.lane(zone).position(id).map(|idx| (zone, idx)))
    }

    fn lane(&self, zone: Zone) -> &Lane {
        match zone {
            Zone::Above => &self.above,
            Zone::Below => &self.below,
        }
    }

    fn lane_mut(&mut self, zone: Zone) -> &mut Lane {
        match zone {
            Zone::Above => &mut self.above,
            Zone::Below => &mut self.below,
        }
    }

    fn repack(&mut self, zone: Zone) {
        self.lane_mut(zone).repack();
        self.repacks = self.repacks.saturating_add(1);
    }
}
