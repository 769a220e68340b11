use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

#[derive(Debug, Default, Clone)]
pub struct BoardMetrics {
    events: u64,
    widgets_added: u64,
    drops_ignored: u64,
    moves: u64,
    reorder_noops: u64,
    drags_cancelled: u64,
    removals: u64,
    resizes: u64,
}

impl BoardMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&mut self) {
        self.events = self.events.saturating_add(1);
    }

    pub fn record_widget_added(&mut self) {
        self.widgets_added = self.widgets_added.saturating_add(1);
    }

    pub fn record_drop_ignored(&mut self) {
        self.drops_ignored = self.drops_ignored.saturating_add(1);
    }

    pub fn record_move(&mut self, moved: bool) {
        if moved {
            self.moves = self.moves.saturating_add(1);
        } else {
            self.reorder_noops = self.reorder_noops.saturating_add(1);
        }
    }

    pub fn record_cancel(&mut self) {
        self.drags_cancelled = self.drags_cancelled.saturating_add(1);
    }

    pub fn record_removal(&mut self) {
        self.removals = self.removals.saturating_add(1);
    }

    pub fn record_resize(&mut self) {
        self.resizes = self.resizes.saturating_add(1);
    }

    pub fn snapshot(&self, repacks: u64) -> MetricSnapshot {
        MetricSnapshot {
            events: self.events,
            widgets_added: self.widgets_added,
            drops_ignored: self.drops_ignored,
            moves: self.moves,
            reorder_noops: self.reorder_noops,
            drags_cancelled: self.drags_cancelled,
            removals: self.removals,
            resizes: self.resizes,
            repacks,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub events: u64,
    pub widgets_added: u64,
    pub drops_ignored: u64,
    pub moves: u64,
    pub reorder_noops: u64,
    pub drags_cancelled: u64,
    pub removals: u64,
    pub resizes: u64,
    pub repacks: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "board_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("events".to_string(), json!(self.events));
        map.insert("widgets_added".to_string(), json!(self.widgets_added));
        map.insert("drops_ignored".to_string(), json!(self.drops_ignored));
        map.insert("moves".to_string(), json!(self.moves));
        map.insert("reorder_noops".to_string(), json!(self.reorder_noops));
        map.insert("drags_cancelled".to_string(), json!(self.drags_cancelled));
        map.insert("removals".to_string(), json!(self.removals));
        map.insert("resizes".to_string(), json!(self.resizes));
        map.insert("repacks".to_string(), json!(self.repacks));
        map
    }
}
