//! Input boundary types delivered by the host event loop.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer events in canvas coordinates. Any screen-space transform has
/// already been applied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    /// The terminal event of a gesture carries no position: the final
    /// overwrite works from the coordinates already in the snapshot.
    Up,
}

/// Modifier key state accompanying keyboard events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// The platform's primary command modifier: Ctrl, or Cmd where the
    /// host reports it as meta.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}
