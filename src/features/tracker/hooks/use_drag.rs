use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};

use crate::features::tracker::dnd::{
    Activation, DndId, DragCoordinator, DragEnd, Draggable, InputKind, Point, Rect, SensorConfig,
};
use crate::models::{Job, JobId};

/// Handle shared by every card on the board. Copy, so it can be captured by
/// reactive closures freely.
#[derive(Clone, Copy)]
pub struct DragHandle {
    pub coordinator: RwSignal<DragCoordinator>,
    pub active_job: Memo<Option<Job>>,
}

impl DragHandle {
    pub fn is_active(&self, job_id: &JobId) -> bool {
        self.active_job
            .with(|active| active.as_ref().is_some_and(|job| &job.id == job_id))
    }

    /// Pointer went down on a draggable. Touch presses arm the hold timer.
    pub fn press(&self, draggable: Draggable, ev: &PointerEvent) {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        let Some(source) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let origin = source
            .closest("[data-dnd-id]")
            .ok()
            .flatten()
            .unwrap_or(source);
        let origin_rect = Rect::from_dom(&origin.get_bounding_client_rect());
        let kind = InputKind::from_pointer_type(&ev.pointer_type());
        let point = pointer_position(ev);

        let mut accepted = false;
        let mut gesture = 0;
        self.coordinator.update_untracked(|c| {
            accepted = c.press(draggable, kind, point, origin_rect);
            gesture = c.gesture();
        });

        if accepted && kind == InputKind::Touch {
            let coordinator = self.coordinator;
            let delay = coordinator.with_untracked(|c| c.config().touch_delay_ms);
            Timeout::new(delay, move || {
                let mut outcome = Activation::Pending;
                coordinator.update(|c| outcome = c.hold_elapsed(gesture));
                if outcome == Activation::Activated {
                    log_drag_start(coordinator);
                }
            })
            .forget();
        }
    }

    /// True if this click is the tail end of a drag and should be ignored.
    pub fn take_click_suppression(&self) -> bool {
        let mut suppressed = false;
        self.coordinator
            .update_untracked(|c| suppressed = c.take_click_suppression());
        suppressed
    }
}

fn pointer_position(ev: &PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn log_drag_start(coordinator: RwSignal<DragCoordinator>) {
    let subject = coordinator.with_untracked(|c| c.active_job().map(|job| job.id.to_string()));
    match subject {
        Some(job_id) => web_sys::console::log_1(&format!("Drag start: job {}", job_id).into()),
        None => web_sys::console::log_1(&"Drag start: non-job draggable".into()),
    }
}

// Snapshot every drop zone currently rendered inside the board
fn measure_droppables(board_ref: NodeRef<Div>) -> Vec<(DndId, Rect)> {
    let Some(board) = board_ref.get_untracked() else {
        return Vec::new();
    };
    let Ok(nodes) = board.query_selector_all("[data-dnd-id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| {
            let raw = element.get_attribute("data-dnd-id")?;
            match raw.parse::<DndId>() {
                Ok(id) => Some((id, Rect::from_dom(&element.get_bounding_client_rect()))),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Skipping drop zone: {}", e).into());
                    None
                }
            }
        })
        .collect()
}

/// Wires window-level pointer listeners to a `DragCoordinator`. Drop zones
/// are measured inside `board_ref` when the pointer is released.
pub fn use_drag(
    config: SensorConfig,
    board_ref: NodeRef<Div>,
    on_drag_end: impl Fn(DragEnd) + Clone + 'static,
) -> DragHandle {
    let coordinator = RwSignal::new(DragCoordinator::new(config));
    let active_job = Memo::new(move |_| coordinator.with(|c| c.active_job().cloned()));

    let move_handle = window_event_listener(ev::pointermove, move |ev| {
        if coordinator.with_untracked(DragCoordinator::is_idle) {
            return;
        }
        let was_dragging = coordinator.with_untracked(DragCoordinator::is_dragging);
        let point = pointer_position(&ev);
        let mut outcome = Activation::Pending;
        coordinator.update(|c| outcome = c.pointer_moved(point));

        if was_dragging {
            ev.prevent_default();
        } else if outcome == Activation::Activated {
            log_drag_start(coordinator);
        }
    });

    let up_handle = window_event_listener(ev::pointerup, {
        let on_drag_end = on_drag_end.clone();
        move |_| {
            if coordinator.with_untracked(DragCoordinator::is_idle) {
                return;
            }
            let droppables = if coordinator.with_untracked(DragCoordinator::is_dragging) {
                measure_droppables(board_ref)
            } else {
                Vec::new()
            };
            let mut end = None;
            coordinator.update(|c| end = c.release(&droppables));
            if let Some(end) = end {
                on_drag_end(end);
            }
        }
    });

    let cancel_handle = window_event_listener(ev::pointercancel, {
        let on_drag_end = on_drag_end.clone();
        move |_| {
            if coordinator.with_untracked(DragCoordinator::is_idle) {
                return;
            }
            let mut end = None;
            coordinator.update(|c| end = c.cancel());
            if let Some(end) = end {
                on_drag_end(end);
            }
        }
    });

    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" || !coordinator.with_untracked(DragCoordinator::is_dragging) {
            return;
        }
        let mut end = None;
        coordinator.update(|c| end = c.cancel());
        if let Some(end) = end {
            on_drag_end(end);
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        cancel_handle.remove();
        key_handle.remove();
    });

    DragHandle { coordinator, active_job }
}
