use leptos::prelude::*;

use crate::features::tracker::dnd::{DndId, Draggable};
use crate::features::tracker::hooks::DragHandle;
use crate::features::tracker::services::LogoConfig;
use crate::models::{Job, JobStatus};

// Logo, title and company. Shared by the in-place card and the drag overlay.
#[component]
pub fn JobCardBody(job: Job, logos: StoredValue<LogoConfig>) -> impl IntoView {
    let company = job.company.clone();
    let (logo_src, set_logo_src) = signal(logos.with_value(|l| l.logo_url(&job.company)));

    // Swap to the placeholder once; a broken placeholder stays broken.
    let on_logo_error = move |_| {
        let current = logo_src.get_untracked();
        if let Some(next) = logos.with_value(|l| l.next_logo_src(&company, &current)) {
            set_logo_src.set(next);
        }
    };

    view! {
        <div class="job-card-body">
            <img
                class="company-logo"
                src=move || logo_src.get()
                alt=format!("{} logo", job.company)
                draggable="false"
                on:error=on_logo_error
            />
            <div class="job-card-text">
                <h4 class="job-title">{job.title.clone()}</h4>
                <p class="job-company">{job.company.clone()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SortableJobCard(
    job: Job,
    column: JobStatus,
    drag: DragHandle,
    logos: StoredValue<LogoConfig>,
    on_select: Callback<Job>,
    on_prep: Callback<Job>,
) -> impl IntoView {
    let job_id = job.id.clone();
    let dnd_id = DndId::Job(job.id.clone()).to_string();
    let job_for_press = job.clone();
    let job_for_select = job.clone();
    let job_for_prep = job.clone();

    view! {
        <div
            class="job-card-sortable"
            class:dragging=move || drag.is_active(&job_id)
            data-dnd-id=dnd_id
        >
            // The handle owns both the drag listener and the select click
            <div
                class="job-card drag-handle"
                on:pointerdown=move |ev| drag.press(Draggable::Job(job_for_press.clone()), &ev)
                on:click=move |_| {
                    if !drag.take_click_suppression() {
                        on_select.run(job_for_select.clone());
                    }
                }
            >
                <JobCardBody job=job logos=logos />
            </div>
            {column.offers_interview_prep().then(|| view! {
                <button
                    class="prep-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_prep.run(job_for_prep.clone());
                    }
                >
                    "✨ Prep for Interview"
                </button>
            })}
        </div>
    }
}
