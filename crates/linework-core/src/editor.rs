//! The editing session: tool selection, the pointer gesture state machine,
//! and its wiring into the history store.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::drawing::Drawing;
use crate::history::{History, WriteMode};
use crate::hit::{self, HitPosition};
use crate::input::{Modifiers, PointerEvent};
use crate::shapes::{Coords, Shape, ShapeKind};
use crate::transform::{self, CursorHint};

/// Available tools. The set is open-ended from the host's point of view;
/// the session only gives meaning to the ones listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Selection,
    Line,
    Rectangle,
}

impl ToolKind {
    /// The shape kind this tool draws, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Selection => None,
        }
    }
}

/// State of the current pointer gesture.
///
/// `Moving` and `Resizing` carry their target inline, so entering either
/// state without a target is unrepresentable.
#[derive(Debug, Clone, Copy)]
enum SessionState {
    Idle,
    Drawing {
        shape_id: usize,
    },
    Moving {
        shape_id: usize,
        /// Pointer offset from the shape's `p1` at grab time, so the shape
        /// does not jump its corner to the pointer.
        grab_offset: Vec2,
    },
    Resizing {
        shape_id: usize,
        handle: HitPosition,
    },
}

/// An editing session: one history store, one active tool, at most one
/// pointer gesture at a time.
///
/// All routing entry points live on the session value itself — there are
/// no ambient listeners to detach; dropping the session releases
/// everything it holds.
#[derive(Debug)]
pub struct EditorSession {
    history: History,
    tool: ToolKind,
    state: SessionState,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session with an empty drawing and the selection tool.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            tool: ToolKind::default(),
            state: SessionState::Idle,
        }
    }

    /// The drawing the renderer should paint right now. Always a whole
    /// snapshot, never a partial view.
    pub fn drawing(&self) -> &Drawing {
        self.history.current()
    }

    /// The underlying history store (read-only).
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools. Abandons any gesture in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.state = SessionState::Idle;
    }

    pub fn is_gesture_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Route a pointer event to the gesture state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Begin a gesture at `position`.
    ///
    /// A drawing tool commits a snapshot containing a new zero-extent
    /// shape. The selection tool classifies what is under the pointer and
    /// commits a boundary snapshot for the drag to overwrite; a miss
    /// leaves the session idle.
    pub fn pointer_down(&mut self, position: Point) {
        if let Some(kind) = self.tool.shape_kind() {
            let mut shape_id = 0;
            self.history.record_with(
                |current| {
                    let mut next = current.clone();
                    shape_id = next.add_shape(kind, position, position);
                    next
                },
                WriteMode::Commit,
            );
            self.state = SessionState::Drawing { shape_id };
            log::debug!("gesture start: drawing {kind:?} as shape {shape_id}");
        } else {
            let next_state = {
                let Some(target) = hit::locate_target(position, self.history.current().shapes())
                else {
                    return;
                };
                let shape_id = target.shape.id();
                if target.position.is_handle() {
                    SessionState::Resizing {
                        shape_id,
                        handle: target.position,
                    }
                } else {
                    SessionState::Moving {
                        shape_id,
                        grab_offset: position - target.shape.p1,
                    }
                }
            };
            self.history.record_with(Drawing::clone, WriteMode::Commit);
            self.state = next_state;
            log::debug!("gesture start: {next_state:?}");
        }
    }

    /// Continue the active gesture. Every write is overwrite-mode, so a
    /// whole drag costs one history entry no matter how many move events
    /// arrive.
    pub fn pointer_move(&mut self, position: Point) {
        match self.state {
            SessionState::Idle => {}
            SessionState::Drawing { shape_id } => {
                self.overwrite_shape(shape_id, |shape| {
                    let mut coords = shape.coords();
                    coords.x2 = position.x;
                    coords.y2 = position.y;
                    Some(coords)
                });
            }
            SessionState::Moving {
                shape_id,
                grab_offset,
            } => {
                self.overwrite_shape(shape_id, |shape| {
                    Some(transform::moved_coords(shape.coords(), grab_offset, position))
                });
            }
            SessionState::Resizing { shape_id, handle } => {
                self.overwrite_shape(shape_id, |shape| {
                    transform::resized_coords(position, handle, shape.coords())
                });
            }
        }
    }

    /// End the active gesture: normalize the final coordinates and
    /// finalize the entry committed at pointer-down with one last
    /// overwrite. A move changes neither orientation nor extent, so its
    /// coordinates are written back as they stand.
    pub fn pointer_up(&mut self) {
        match self.state {
            SessionState::Idle => return,
            SessionState::Drawing { shape_id } | SessionState::Resizing { shape_id, .. } => {
                self.overwrite_shape(shape_id, |shape| Some(shape.normalized_coords()));
            }
            SessionState::Moving { shape_id, .. } => {
                self.overwrite_shape(shape_id, |shape| Some(shape.coords()));
            }
        }
        self.state = SessionState::Idle;
        log::debug!("gesture end: {} history entries", self.history.len());
    }

    /// Overwrite the current snapshot with `shape_id`'s coordinates
    /// replaced by whatever `update` produces; `None` leaves the geometry
    /// unchanged (still rewrites the snapshot, changing nothing).
    fn overwrite_shape(
        &mut self,
        shape_id: usize,
        update: impl FnOnce(&Shape) -> Option<Coords>,
    ) {
        self.history.record_with(
            |current| {
                let mut next = current.clone();
                let edited = next
                    .shape(shape_id)
                    .and_then(|shape| update(shape).map(|coords| shape.with_coords(coords)));
                if let Some(shape) = edited {
                    next.replace(shape);
                }
                next
            },
            WriteMode::Overwrite,
        );
    }

    /// Undo one step. Ignored while a gesture is active, so the entry the
    /// drag is overwriting cannot be pulled out from under it.
    pub fn undo(&mut self) -> bool {
        if self.is_gesture_active() {
            log::debug!("undo ignored: gesture in progress");
            return false;
        }
        self.history.undo()
    }

    /// Redo one step. Ignored while a gesture is active.
    pub fn redo(&mut self) -> bool {
        if self.is_gesture_active() {
            log::debug!("redo ignored: gesture in progress");
            return false;
        }
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Route a keyboard event. The only bindings this core owns are
    /// modifier+`z` (undo) and its shifted variant (redo); everything else
    /// is reported unhandled. Returns whether the event did anything.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> bool {
        if modifiers.command() && key.eq_ignore_ascii_case("z") {
            if modifiers.shift {
                self.redo()
            } else {
                self.undo()
            }
        } else {
            false
        }
    }

    /// The cursor the host should show for a pointer hovering at
    /// `position` with the current tool.
    pub fn hover_cursor(&self, position: Point) -> CursorHint {
        match self.tool {
            ToolKind::Selection => hit::locate_target(position, self.drawing().shapes())
                .map(|target| transform::cursor_for(target.position))
                .unwrap_or_default(),
            _ => CursorHint::Crosshair,
        }
    }
}
