use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::category::CategoryTable;
use crate::collection::{MoveOutcome, WidgetCollection};
use crate::dropzone::{DropOutcome, DropZoneController};
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::metrics::{BoardMetrics, MetricSnapshot};
use crate::packer::Row;
use crate::reorder::{DragCommand, DragState, ReorderController, ReorderOutcome};
use crate::widget::{IdGenerator, TimestampIdGenerator, WidgetId, WidgetSize, Zone};

use super::BoardConfig;

const LOG_TARGET: &str = "widget_grid::board";

/// Discrete input delivered to the board, one per UI gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    PaletteDragOver(Zone),
    PaletteDragLeave,
    PaletteDrop { zone: Zone, payload: String },
    Reorder(DragCommand),
    Remove(WidgetId),
    Resize { id: WidgetId, size: WidgetSize },
    SetWidgetMode(bool),
}

impl BoardEvent {
    pub fn palette_drop(zone: Zone, payload: impl Into<String>) -> Self {
        BoardEvent::PaletteDrop {
            zone,
            payload: payload.into(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BoardEvent::PaletteDragOver(_) => "palette_drag_over",
            BoardEvent::PaletteDragLeave => "palette_drag_leave",
            BoardEvent::PaletteDrop { .. } => "palette_drop",
            BoardEvent::Reorder(command) => command.name(),
            BoardEvent::Remove(_) => "remove",
            BoardEvent::Resize { .. } => "resize",
            BoardEvent::SetWidgetMode(_) => "set_widget_mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOutcome {
    /// Zone highlight after a palette drag-over or drag-leave.
    Highlight(Option<Zone>),
    Drop(DropOutcome),
    Reorder(ReorderOutcome),
    Removed(Option<WidgetId>),
    Resized(bool),
    WidgetMode(bool),
}

/// Owns the widget collection and serialises every mutation through `apply`.
pub struct Board {
    config: BoardConfig,
    collection: WidgetCollection,
    table: CategoryTable,
    ids: Box<dyn IdGenerator>,
    drops: DropZoneController,
    reorder: ReorderController,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_parts(config, CategoryTable::builtin(), TimestampIdGenerator::new())
    }

    pub fn with_parts<G>(config: BoardConfig, table: CategoryTable, ids: G) -> Self
    where
        G: IdGenerator + 'static,
    {
        let mut drops = DropZoneController::new(config.default_widget_name.clone());
        drops.set_enabled(config.widget_mode);
        Self {
            config,
            collection: WidgetCollection::new(),
            table,
            ids: Box::new(ids),
            drops,
            reorder: ReorderController::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Widget mode itself changes through [`BoardEvent::SetWidgetMode`].
    pub fn set_default_widget_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.drops.set_default_name(name.clone());
        self.config.default_widget_name = name;
    }

    pub fn enable_metrics(&mut self) -> Option<Arc<Mutex<BoardMetrics>>> {
        self.config.enable_metrics();
        self.config.metrics_handle()
    }

    pub fn collection(&self) -> &WidgetCollection {
        &self.collection
    }

    pub fn category_table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn rows(&self, zone: Zone) -> Vec<Row<'_>> {
        self.collection.rows(zone)
    }

    pub fn drag_state(&self) -> &DragState {
        self.reorder.state()
    }

    pub fn highlighted_zone(&self) -> Option<Zone> {
        self.drops.highlighted()
    }

    pub fn widget_mode(&self) -> bool {
        self.drops.is_enabled()
    }

    pub fn apply(&mut self, event: BoardEvent) -> BoardOutcome {
        let event_name = event.name();
        let outcome = match event {
            BoardEvent::PaletteDragOver(zone) => {
                self.drops.drag_over(zone, self.reorder.is_active());
                BoardOutcome::Highlight(self.drops.highlighted())
            }
            BoardEvent::PaletteDragLeave => {
                self.drops.drag_leave(self.reorder.is_active());
                BoardOutcome::Highlight(self.drops.highlighted())
            }
            BoardEvent::PaletteDrop { zone, payload } => self.handle_drop(zone, &payload),
            BoardEvent::Reorder(command) => self.handle_reorder(command),
            BoardEvent::Remove(id) => {
                let removed = self.collection.remove(&id).map(|w| w.id().clone());
                if removed.is_some() {
                    self.with_metrics(BoardMetrics::record_removal);
                    self.log(LogLevel::Info, "widget_removed", [json_kv("id", id.as_str())]);
                }
                BoardOutcome::Removed(removed)
            }
            BoardEvent::Resize { id, size } => {
                let resized = self.collection.resize(&id, size);
                if resized {
                    self.with_metrics(BoardMetrics::record_resize);
                    self.log(
                        LogLevel::Info,
                        "widget_resized",
                        [json_kv("id", id.as_str()), json_kv("size", size.as_str())],
                    );
                }
                BoardOutcome::Resized(resized)
            }
            BoardEvent::SetWidgetMode(enabled) => {
                self.drops.set_enabled(enabled);
                self.config.widget_mode = enabled;
                self.log(LogLevel::Info, "widget_mode_changed", [json_kv("enabled", enabled)]);
                BoardOutcome::WidgetMode(enabled)
            }
        };

        self.with_metrics(BoardMetrics::record_event);
        self.log(LogLevel::Trace, "event_handled", [json_kv("event", event_name)]);
        outcome
    }

    pub fn run_scripted<I>(&mut self, events: I) -> Vec<BoardOutcome>
    where
        I: IntoIterator<Item = BoardEvent>,
    {
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.config.metrics.as_ref()?;
        let guard = metrics.lock().ok()?;
        Some(guard.snapshot(self.collection.repack_count()))
    }

    /// Log the current metrics snapshot, if both metrics and a logger are set.
    pub fn emit_metrics(&self) {
        let (Some(logger), Some(snapshot)) = (self.config.logger.as_ref(), self.metrics_snapshot())
        else {
            return;
        };
        let _ = logger.log_event(snapshot.to_log_event(&self.config.metrics_target));
    }

    fn handle_drop(&mut self, zone: Zone, payload: &str) -> BoardOutcome {
        let outcome = self.drops.handle_drop(
            zone,
            payload,
            self.reorder.is_active(),
            &mut self.collection,
            &self.table,
            self.ids.as_mut(),
        );

        match &outcome {
            DropOutcome::Added(id) => {
                self.with_metrics(BoardMetrics::record_widget_added);
                let mut fields = vec![json_kv("id", id.as_str()), json_kv("zone", zone.as_str())];
                if let Some(widget) = self.collection.get(id) {
                    fields.push(json_kv("type", widget.kind_name()));
                    fields.push(json_kv("size", widget.size().as_str()));
                    fields.push(json_kv("category", widget.category_id()));
                }
                self.log(LogLevel::Info, "widget_added", fields);
            }
            DropOutcome::Ignored(reason) => {
                self.with_metrics(BoardMetrics::record_drop_ignored);
                self.log(
                    LogLevel::Debug,
                    "drop_ignored",
                    [json_kv("zone", zone.as_str()), json_kv("reason", reason.as_str())],
                );
            }
        }

        BoardOutcome::Drop(outcome)
    }

    fn handle_reorder(&mut self, command: DragCommand) -> BoardOutcome {
        let outcome = self.reorder.handle(command, &mut self.collection);

        match &outcome {
            ReorderOutcome::Started => {
                let dragged = self.reorder.state().dragged().map(|id| id.to_string());
                self.log(LogLevel::Debug, "drag_started", [json_kv("id", json!(dragged))]);
            }
            ReorderOutcome::Moved(result) => {
                self.with_metrics(|metrics| metrics.record_move(result.is_moved()));
                self.log(LogLevel::Info, "widget_reordered", describe_move(result));
            }
            ReorderOutcome::Released | ReorderOutcome::Cancelled => {
                self.with_metrics(BoardMetrics::record_cancel);
                self.log(LogLevel::Debug, "drag_cancelled", std::iter::empty());
            }
            ReorderOutcome::Hovering | ReorderOutcome::Dragging | ReorderOutcome::Ignored => {}
        }

        BoardOutcome::Reorder(outcome)
    }

    fn with_metrics(&self, record: impl FnOnce(&mut BoardMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut *guard);
            }
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            if !logger.enabled(level) {
                return;
            }
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

fn describe_move(result: &MoveOutcome) -> Vec<(String, Value)> {
    match result {
        MoveOutcome::Moved { from, to, index } => vec![
            json_kv("outcome", "moved"),
            json_kv("from", from.as_str()),
            json_kv("to", to.as_str()),
            json_kv("index", *index as u64),
        ],
        MoveOutcome::SameWidget => vec![json_kv("outcome", "same_widget")],
        MoveOutcome::UnknownTarget => vec![json_kv("outcome", "unknown_target")],
        MoveOutcome::UnknownWidget => vec![json_kv("outcome", "unknown_widget")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropzone::DropIgnored;
    use crate::logging::{Logger, MemorySink};
    use crate::reorder::Side;
    use crate::widget::SequentialIdGenerator;

    fn board() -> Board {
        Board::with_parts(
            BoardConfig::default(),
            CategoryTable::builtin(),
            SequentialIdGenerator::new("w"),
        )
    }

    fn ids(board: &Board, zone: Zone) -> Vec<String> {
        board
            .collection()
            .widgets(zone)
            .iter()
            .map(|w| w.id().to_string())
            .collect()
    }

    #[test]
    fn drops_append_and_repack() {
        let mut board = board();
        board.run_scripted([
            BoardEvent::palette_drop(Zone::Above, "Contact Form"),
            BoardEvent::palette_drop(Zone::Above, "Profile Card"),
            BoardEvent::palette_drop(Zone::Above, "Share Button"),
        ]);
        let rows: Vec<Vec<String>> = board
            .rows(Zone::Above)
            .iter()
            .map(|row| row.widgets().iter().map(|w| w.id().to_string()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["w-1"], vec!["w-2", "w-3"]]);
    }

    #[test]
    fn palette_drop_is_rejected_mid_reorder() {
        let mut board = board();
        board.apply(BoardEvent::palette_drop(Zone::Above, "Badge"));
        board.apply(BoardEvent::Reorder(DragCommand::StartDrag("w-1".into())));

        assert_eq!(
            board.apply(BoardEvent::PaletteDragOver(Zone::Below)),
            BoardOutcome::Highlight(None)
        );
        assert_eq!(
            board.apply(BoardEvent::palette_drop(Zone::Below, "Badge")),
            BoardOutcome::Drop(DropOutcome::Ignored(DropIgnored::ReorderActive))
        );
        assert_eq!(board.collection().len(), 1);

        board.apply(BoardEvent::Reorder(DragCommand::CancelDrag));
        assert_eq!(
            board.apply(BoardEvent::palette_drop(Zone::Below, "Badge")),
            BoardOutcome::Drop(DropOutcome::Added("w-2".into()))
        );
        assert_eq!(board.collection().len(), 2);
    }

    #[test]
    fn reorder_across_zones() {
        let mut board = board();
        board.run_scripted([
            BoardEvent::palette_drop(Zone::Above, "A"),
            BoardEvent::palette_drop(Zone::Below, "B"),
            BoardEvent::Reorder(DragCommand::StartDrag("w-1".into())),
            BoardEvent::Reorder(DragCommand::HoverOver {
                over: "w-2".into(),
                side: Side::Right,
            }),
            BoardEvent::Reorder(DragCommand::Drop),
        ]);
        assert!(ids(&board, Zone::Above).is_empty());
        assert_eq!(ids(&board, Zone::Below), vec!["w-2", "w-1"]);
        assert_eq!(board.drag_state(), &DragState::Idle);
    }

    #[test]
    fn widget_mode_gates_drops() {
        let mut board = board();
        board.apply(BoardEvent::SetWidgetMode(false));
        assert!(!board.widget_mode());
        assert_eq!(
            board.apply(BoardEvent::palette_drop(Zone::Above, "Badge")),
            BoardOutcome::Drop(DropOutcome::Ignored(DropIgnored::WidgetModeDisabled))
        );
        board.apply(BoardEvent::SetWidgetMode(true));
        assert_eq!(
            board.apply(BoardEvent::palette_drop(Zone::Above, "Badge")),
            BoardOutcome::Drop(DropOutcome::Added("w-1".into()))
        );
    }

    #[test]
    fn remove_and_resize_report_unknown_ids() {
        let mut board = board();
        board.apply(BoardEvent::palette_drop(Zone::Above, "Badge"));
        assert_eq!(
            board.apply(BoardEvent::Resize {
                id: "w-1".into(),
                size: WidgetSize::Large
            }),
            BoardOutcome::Resized(true)
        );
        assert_eq!(
            board.apply(BoardEvent::Remove("w-9".into())),
            BoardOutcome::Removed(None)
        );
        assert_eq!(
            board.apply(BoardEvent::Remove("w-1".into())),
            BoardOutcome::Removed(Some("w-1".into()))
        );
        assert!(board.collection().is_empty());
    }

    #[test]
    fn metrics_and_logs_follow_events() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Debug);
        let mut config = BoardConfig::default().with_logger(logger);
        config.enable_metrics();
        let mut board = Board::with_parts(
            config,
            CategoryTable::builtin(),
            SequentialIdGenerator::new("w"),
        );

        board.run_scripted([
            BoardEvent::palette_drop(Zone::Above, "Badge"),
            BoardEvent::palette_drop(Zone::Above, "Card"),
            BoardEvent::Reorder(DragCommand::StartDrag("w-1".into())),
            BoardEvent::palette_drop(Zone::Above, "Ignored"),
            BoardEvent::Reorder(DragCommand::HoverOver {
                over: "w-2".into(),
                side: Side::Right,
            }),
            BoardEvent::Reorder(DragCommand::Drop),
        ]);
        board.emit_metrics();

        let snapshot = board.metrics_snapshot().unwrap();
        assert_eq!(snapshot.events, 6);
        assert_eq!(snapshot.widgets_added, 2);
        assert_eq!(snapshot.drops_ignored, 1);
        assert_eq!(snapshot.moves, 1);
        assert_eq!(snapshot.repacks, board.collection().repack_count());

        let messages = sink.messages();
        assert!(messages.contains(&"widget_added".to_string()));
        assert!(messages.contains(&"drop_ignored".to_string()));
        assert!(messages.contains(&"widget_reordered".to_string()));
        assert_eq!(messages.last().map(String::as_str), Some("board_metrics"));
        assert!(!messages.contains(&"event_handled".to_string()));
    }

    #[test]
    fn config_stays_in_step_with_drop_zone() {
        let mut board = board();
        board.apply(BoardEvent::SetWidgetMode(false));
        assert!(!board.config().widget_mode);
        assert!(!board.widget_mode());

        board.apply(BoardEvent::SetWidgetMode(true));
        board.set_default_widget_name("Untitled");
        assert_eq!(board.config().default_widget_name, "Untitled");
        board.apply(BoardEvent::palette_drop(Zone::Above, "   "));
        let widget = board.collection().get(&"w-1".into()).unwrap();
        assert_eq!(widget.name(), "Untitled");
    }

    #[test]
    fn metrics_can_be_enabled_after_construction() {
        let mut board = board();
        assert!(board.metrics_snapshot().is_none());
        let handle = board.enable_metrics().unwrap();
        board.apply(BoardEvent::palette_drop(Zone::Above, "Badge"));
        assert_eq!(handle.lock().unwrap().snapshot(0).widgets_added, 1);
    }

    #[test]
    fn highlight_survives_drag_leave_during_reorder() {
        let mut board = board();
        board.apply(BoardEvent::palette_drop(Zone::Above, "Badge"));
        board.apply(BoardEvent::PaletteDragOver(Zone::Below));
        board.apply(BoardEvent::Reorder(DragCommand::StartDrag("w-1".into())));

        assert_eq!(
            board.apply(BoardEvent::PaletteDragLeave),
            BoardOutcome::Highlight(Some(Zone::Below))
        );
        assert_eq!(
            board.apply(BoardEvent::palette_drop(Zone::Below, "Badge")),
            BoardOutcome::Drop(DropOutcome::Ignored(DropIgnored::ReorderActive))
        );
        assert_eq!(board.highlighted_zone(), None);
    }

    #[test]
    fn log_file_journals_board_activity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.log");
        let config = BoardConfig::default().with_log_file(&path, 0).unwrap();
        let mut board = Board::with_parts(
            config,
            CategoryTable::builtin(),
            SequentialIdGenerator::new("w"),
        );
        board.apply(BoardEvent::palette_drop(Zone::Below, "Badge"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["target"], LOG_TARGET);
        assert_eq!(lines[0]["message"], "widget_added");
        assert_eq!(lines[0]["fields"]["zone"], "below");
    }
}
