pub mod column;
pub mod drag_overlay;
pub mod job_card;
pub mod tracker;

pub use column::TrackerColumn;
pub use drag_overlay::DragOverlay;
pub use job_card::{JobCardBody, SortableJobCard};
pub use tracker::KanbanTracker;
