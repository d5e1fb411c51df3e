//! Input events consumed by the editor core.
//!
//! Positions are local to the originating view's canvas.

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::viewport::view::View;

/// Primary selects and drags gizmos, secondary pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved with no button held
    PointerMove { view: View, pos: Pos2 },
    PointerDown {
        view: View,
        pos: Pos2,
        button: PointerButton,
    },
    /// Pointer moved while `button` is held
    PointerDrag {
        view: View,
        pos: Pos2,
        button: PointerButton,
    },
    PointerUp {
        view: View,
        pos: Pos2,
        button: PointerButton,
    },
    /// Wheel; only the sign of `delta` matters
    Scroll { view: View, delta: f32 },
    Key(ArrowKey),
    /// Window lost focus: abandon any drag or pan
    FocusLost,
}
