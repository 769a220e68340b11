//! Reorder session state machine.
//!
//! ## Invariants
//!
//! 1. At most one session is active; `StartDrag` during a session is ignored.
//! 2. The collection is mutated only by `Drop` while `Hovering`, and only
//!    through [`WidgetCollection::move_widget`].
//! 3. `Drop` and `CancelDrag` always end in `Idle`.

use crate::collection::{MoveOutcome, WidgetCollection};
use crate::geometry::Rect;
use crate::widget::WidgetId;

/// Which half of the hovered widget the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Left half maps to `Left`; the midpoint and anything right of it to `Right`.
    pub fn from_pointer(pointer_x: f32, target: &Rect) -> Self {
        if pointer_x < target.mid_x() {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Toolkit-independent drag gestures over placed widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum DragCommand {
    StartDrag(WidgetId),
    HoverOver { over: WidgetId, side: Side },
    LeaveTarget,
    Drop,
    CancelDrag,
}

impl DragCommand {
    /// Hover command with the side derived from the pointer position.
    ///
    /// A pointer outside `target` means the target was left.
    pub fn hover_at(over: WidgetId, pointer: (f32, f32), target: &Rect) -> Self {
        let (x, y) = pointer;
        if !target.contains(x, y) {
            return DragCommand::LeaveTarget;
        }
        DragCommand::HoverOver {
            over,
            side: Side::from_pointer(x, target),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DragCommand::StartDrag(_) => "start_drag",
            DragCommand::HoverOver { .. } => "hover_over",
            DragCommand::LeaveTarget => "leave_target",
            DragCommand::Drop => "drop",
            DragCommand::CancelDrag => "cancel_drag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: WidgetId,
    },
    Hovering {
        id: WidgetId,
        over: WidgetId,
        side: Side,
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    pub fn dragged(&self) -> Option<&WidgetId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { id } | DragState::Hovering { id, .. } => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    Started,
    Hovering,
    /// Hover target cleared, session still active.
    Dragging,
    /// A drop ran; the move itself may still have been a no-op.
    Moved(MoveOutcome),
    /// Drop without a hover target.
    Released,
    Cancelled,
    Ignored,
}

#[derive(Debug, Default)]
pub struct ReorderController {
    state: DragState,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn handle(
        &mut self,
        command: DragCommand,
        collection: &mut WidgetCollection,
    ) -> ReorderOutcome {
        match command {
            DragCommand::StartDrag(id) => {
                if self.state.is_active() || !collection.contains(&id) {
                    return ReorderOutcome::Ignored;
                }
                self.state = DragState::Dragging { id };
                ReorderOutcome::Started
            }
            DragCommand::HoverOver { over, side } => {
                let Some(id) = self.state.dragged().cloned() else {
                    return ReorderOutcome::Ignored;
                };
                if over == id {
                    self.state = DragState::Dragging { id };
                    return ReorderOutcome::Dragging;
                }
                self.state = DragState::Hovering { id, over, side };
                ReorderOutcome::Hovering
            }
            DragCommand::LeaveTarget => match std::mem::take(&mut self.state) {
                DragState::Hovering { id, .. } | DragState::Dragging { id } => {
                    self.state = DragState::Dragging { id };
                    ReorderOutcome::Dragging
                }
                DragState::Idle => ReorderOutcome::Ignored,
            },
            DragCommand::Drop => match std::mem::take(&mut self.state) {
                DragState::Hovering { id, over, side } => {
                    ReorderOutcome::Moved(collection.move_widget(&id, &over, side))
                }
                DragState::Dragging { .. } => ReorderOutcome::Released,
                DragState::Idle => ReorderOutcome::Ignored,
            },
            DragCommand::CancelDrag => {
                if std::mem::take(&mut self.state).is_active() {
                    ReorderOutcome::Cancelled
                } else {
                    ReorderOutcome::Ignored
                }
            }
        }
    }
}
