use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Activation thresholds for the two input recognisers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Pixels a mouse/pen pointer must travel before a press becomes a drag.
    pub pointer_distance: f64,
    /// Milliseconds a touch must be held before it becomes a drag.
    pub touch_delay_ms: u32,
    /// Pixels a touch may wander during the hold before it is treated as a scroll.
    pub touch_tolerance: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            pointer_distance: 8.0,
            touch_delay_ms: 200,
            touch_tolerance: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pointer,
    Touch,
}

impl InputKind {
    /// Maps `PointerEvent.pointerType` onto a recogniser.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        if pointer_type == "touch" {
            InputKind::Touch
        } else {
            InputKind::Pointer
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pending,
    Activated,
    Aborted,
}

/// A press that has not yet been recognised as a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingActivation {
    pub kind: InputKind,
    pub origin: Point,
    delay_elapsed: bool,
}

impl PendingActivation {
    pub fn new(kind: InputKind, origin: Point) -> Self {
        Self { kind, origin, delay_elapsed: false }
    }

    pub fn on_move(&self, point: Point, config: &SensorConfig) -> Activation {
        let moved = point.distance_to(self.origin);
        match self.kind {
            InputKind::Pointer if moved >= config.pointer_distance => Activation::Activated,
            InputKind::Pointer => Activation::Pending,
            InputKind::Touch if self.delay_elapsed => Activation::Activated,
            InputKind::Touch if moved > config.touch_tolerance => Activation::Aborted,
            InputKind::Touch => Activation::Pending,
        }
    }

    /// Called when the hold timer fires. Only touch presses care.
    pub fn on_delay_elapsed(&mut self) -> Activation {
        match self.kind {
            InputKind::Touch => {
                self.delay_elapsed = true;
                Activation::Activated
            }
            InputKind::Pointer => Activation::Pending,
        }
    }
}
