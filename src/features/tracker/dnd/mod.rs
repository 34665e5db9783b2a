//! Minimal drag-and-drop engine for the tracker board: pointer/touch
//! activation, closest-corners collision and the drag lifecycle.

pub mod collision;
pub mod coordinator;
pub mod geometry;
pub mod sensors;

pub use coordinator::{DndId, DragCoordinator, DragEnd, Draggable, StatusChange};
pub use geometry::{Point, Rect};
pub use sensors::{Activation, InputKind, SensorConfig};
