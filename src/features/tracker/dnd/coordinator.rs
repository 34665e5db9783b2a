use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::models::{Job, JobId, JobStatus};

use super::collision::closest_corners;
use super::geometry::{Point, Rect};
use super::sensors::{Activation, InputKind, PendingActivation, SensorConfig};

/// Identity of anything that takes part in a drag: a column drop zone or a
/// job card. Rendered into the DOM as `data-dnd-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DndId {
    Column(JobStatus),
    Job(JobId),
}

impl fmt::Display for DndId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DndId::Column(status) => write!(f, "column:{}", status),
            DndId::Job(id) => write!(f, "job:{}", id),
        }
    }
}

impl FromStr for DndId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("column", status)) => status
                .parse()
                .map(DndId::Column)
                .map_err(|_| BoardError::InvalidDndId(s.to_string())),
            Some(("job", id)) if !id.is_empty() => Ok(DndId::Job(JobId::new(id))),
            _ => Err(BoardError::InvalidDndId(s.to_string())),
        }
    }
}

/// Payload carried by a drag source.
#[derive(Debug, Clone, PartialEq)]
pub enum Draggable {
    Job(Job),
    // Columns are drop zones only; a column drag must never show a job overlay.
    #[allow(dead_code)]
    Column(JobStatus),
}

impl Draggable {
    pub fn id(&self) -> DndId {
        match self {
            Draggable::Job(job) => DndId::Job(job.id.clone()),
            Draggable::Column(status) => DndId::Column(*status),
        }
    }
}

/// Outcome of a finished gesture: what was dragged and where it landed.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub active: DndId,
    pub over: Option<DndId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub job_id: JobId,
    pub status: JobStatus,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Pending {
        draggable: Draggable,
        activation: PendingActivation,
        origin_rect: Rect,
        pointer: Point,
    },
    Dragging {
        draggable: Draggable,
        origin_rect: Rect,
        origin: Point,
        pointer: Point,
    },
}

/// Drag lifecycle: idle -> pending (press not yet recognised) -> dragging -> idle.
///
/// Pure state; the board's hook feeds it DOM events and measured rects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragCoordinator {
    config: SensorConfig,
    phase: Phase,
    gesture: u64,
    active_job: Option<Job>,
    suppress_click: bool,
}

impl DragCoordinator {
    pub fn new(config: SensorConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Sequence number of the most recent press, used to discard stale hold timers.
    pub fn gesture(&self) -> u64 {
        self.gesture
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The job shown in the drag overlay, if any.
    pub fn active_job(&self) -> Option<&Job> {
        self.active_job.as_ref()
    }

    /// Where the overlay card sits: its origin rect moved by the pointer delta.
    pub fn overlay_rect(&self) -> Option<Rect> {
        match &self.phase {
            Phase::Dragging { origin_rect, origin, pointer, .. } => {
                Some(origin_rect.translate(pointer.delta_from(*origin)))
            }
            _ => None,
        }
    }

    /// Starts a pending gesture. Returns false if another gesture is in flight.
    pub fn press(&mut self, draggable: Draggable, kind: InputKind, point: Point, origin_rect: Rect) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.suppress_click = false;
        self.gesture += 1;
        self.phase = Phase::Pending {
            draggable,
            activation: PendingActivation::new(kind, point),
            origin_rect,
            pointer: point,
        };
        true
    }

    pub fn pointer_moved(&mut self, point: Point) -> Activation {
        match &mut self.phase {
            Phase::Idle => Activation::Aborted,
            Phase::Dragging { pointer, .. } => {
                *pointer = point;
                Activation::Activated
            }
            Phase::Pending { activation, pointer, .. } => {
                *pointer = point;
                let outcome = activation.on_move(point, &self.config);
                self.settle(outcome);
                outcome
            }
        }
    }

    /// The touch hold timer armed for `gesture` fired.
    pub fn hold_elapsed(&mut self, gesture: u64) -> Activation {
        if gesture != self.gesture {
            return Activation::Aborted;
        }
        match &mut self.phase {
            Phase::Pending { activation, .. } => {
                let outcome = activation.on_delay_elapsed();
                self.settle(outcome);
                outcome
            }
            Phase::Dragging { .. } => Activation::Activated,
            Phase::Idle => Activation::Aborted,
        }
    }

    /// Pointer released. Yields a `DragEnd` only when a drag was active;
    /// releasing a press that never activated is a plain click.
    pub fn release(&mut self, droppables: &[(DndId, Rect)]) -> Option<DragEnd> {
        let dragged = self.overlay_rect();
        let end = self.finish()?;
        Some(DragEnd {
            over: dragged.and_then(|rect| closest_corners(&rect, droppables)),
            ..end
        })
    }

    /// Gesture abandoned (pointercancel, Escape). Ends with no drop target.
    pub fn cancel(&mut self) -> Option<DragEnd> {
        self.finish()
    }

    /// Consumes the flag set by a completed drag so the trailing click is ignored.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }

    fn settle(&mut self, outcome: Activation) {
        match outcome {
            Activation::Pending => {}
            Activation::Aborted => self.phase = Phase::Idle,
            Activation::Activated => {
                if let Phase::Pending { draggable, activation, origin_rect, pointer } =
                    std::mem::take(&mut self.phase)
                {
                    if let Draggable::Job(job) = &draggable {
                        self.active_job = Some(job.clone());
                    }
                    self.phase = Phase::Dragging {
                        draggable,
                        origin_rect,
                        origin: activation.origin,
                        pointer,
                    };
                }
            }
        }
    }

    fn finish(&mut self) -> Option<DragEnd> {
        self.active_job = None;
        match std::mem::take(&mut self.phase) {
            Phase::Dragging { draggable, .. } => {
                self.suppress_click = true;
                Some(DragEnd { active: draggable.id(), over: None })
            }
            _ => None,
        }
    }
}
