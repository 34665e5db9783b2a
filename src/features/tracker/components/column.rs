use leptos::prelude::*;

use crate::features::tracker::components::SortableJobCard;
use crate::features::tracker::dnd::DndId;
use crate::features::tracker::hooks::DragHandle;
use crate::features::tracker::services::LogoConfig;
use crate::models::{Job, JobStatus};

#[component]
pub fn TrackerColumn(
    status: JobStatus,
    #[prop(into)] jobs: Signal<Vec<Job>>,
    drag: DragHandle,
    logos: StoredValue<LogoConfig>,
    on_select: Callback<Job>,
    on_prep: Callback<Job>,
) -> impl IntoView {
    view! {
        <div class="kanban-column">
            <div class="column-header">
                <div class="column-title">
                    <span class=format!("column-dot {}", status.accent_class())></span>
                    <h3>{status.title()}</h3>
                </div>
                <span class="task-count">{move || jobs.with(Vec::len)}</span>
            </div>
            <div class="column-content" data-dnd-id=DndId::Column(status).to_string()>
                <For
                    each=move || jobs.get()
                    key=|job| job.id.clone()
                    children=move |job| {
                        view! {
                            <SortableJobCard
                                job=job
                                column=status
                                drag=drag
                                logos=logos
                                on_select=on_select
                                on_prep=on_prep
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
