use leptos::html::Div;
use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::features::tracker::components::{DragOverlay, TrackerColumn};
use crate::features::tracker::dnd::DragEnd;
use crate::features::tracker::hooks::use_drag;
use crate::features::tracker::services::{resolve_status_change, Columns};
use crate::models::{Job, JobId, JobStatus};

/// Drag-and-drop board of tracked job applications.
///
/// The board only reads `jobs`. Moving a card to another column asks the
/// owner to persist the change through `on_update_status`; the card moves
/// once the owner's job list reflects it.
#[component]
pub fn KanbanTracker(
    #[prop(into)] jobs: Signal<Vec<Job>>,
    on_update_status: Callback<(JobId, JobStatus)>,
    on_select: Callback<Job>,
    on_prep: Callback<Job>,
    #[prop(optional)] config: BoardConfig,
) -> impl IntoView {
    let columns = Memo::new(move |_| jobs.with(|jobs| Columns::classify(jobs)));
    let logos = StoredValue::new(config.logos);
    let board_ref: NodeRef<Div> = NodeRef::new();

    let handle_drag_end = move |end: DragEnd| {
        match columns.with_untracked(|columns| resolve_status_change(columns, &end)) {
            Some(change) => {
                web_sys::console::log_1(
                    &format!("Drop: job {} -> {}", change.job_id, change.status).into(),
                );
                on_update_status.run((change.job_id, change.status));
            }
            None => {
                web_sys::console::log_1(&format!("Drop: {} left in place", end.active).into());
            }
        }
    };
    let drag = use_drag(config.sensors, board_ref, handle_drag_end);

    view! {
        <div class="tracker">
            <div class="tracker-header">
                <span class="tracker-icon">"💼"</span>
                <h2>"Application Tracker"</h2>
            </div>

            <div class="kanban-board" node_ref=board_ref>
                {JobStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let column_jobs = Signal::derive(move || {
                            columns.with(|columns| columns.jobs(status).to_vec())
                        });
                        view! {
                            <TrackerColumn
                                status=status
                                jobs=column_jobs
                                drag=drag
                                logos=logos
                                on_select=on_select
                                on_prep=on_prep
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <DragOverlay drag=drag columns=columns logos=logos />
        </div>
    }
}
