// Pure pointer/wheel mapping for the orbit camera; no web types so host tests
// can include it.

use crate::constants::{PAN_BUTTON, ROTATE_BUTTON, WHEEL_LINE_PX};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Idle,
    Rotate,
    Pan,
}

/// Which orbit gesture a pointer-down starts.
#[inline]
pub fn drag_mode(button: i16, shift: bool) -> DragMode {
    match button {
        ROTATE_BUTTON if shift => DragMode::Pan,
        ROTATE_BUTTON => DragMode::Rotate,
        PAN_BUTTON => DragMode::Pan,
        _ => DragMode::Idle,
    }
}

/// Normalise `WheelEvent.deltaY` to pixels (deltaMode 0 = px, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_px: f32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        1 => d * WHEEL_LINE_PX,
        2 => d * page_px,
        _ => d,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub mode: DragMode,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, pointer_id: i32, at: Vec2) -> bool {
        if mode == DragMode::Idle || self.mode != DragMode::Idle {
            return false;
        }
        *self = Self {
            mode,
            pointer_id,
            last: at,
        };
        true
    }

    /// Pixel delta since the last move of the dragging pointer.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<(DragMode, Vec2)> {
        if self.mode == DragMode::Idle || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some((self.mode, delta))
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.mode == DragMode::Idle || pointer_id != self.pointer_id {
            return false;
        }
        self.mode = DragMode::Idle;
        true
    }
}
