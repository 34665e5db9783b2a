use leptos::html::Dialog;
use leptos::prelude::*;

use crate::components::{InterviewPrepModal, JobDetailPanel};
use crate::features::applications::{use_jobs, JobsHook};
use crate::features::tracker::KanbanTracker;
use crate::models::{Job, JobId};
use crate::services::load_board_config;

#[component]
pub fn TrackerPage() -> impl IntoView {
    let JobsHook { jobs, update_status } = use_jobs();
    let config = load_board_config();

    // Selection is kept by id so the panel follows status changes
    let (selected_job_id, set_selected_job_id) = signal::<Option<JobId>>(None);
    let selected_job = Memo::new(move |_| {
        selected_job_id.get().and_then(|id| {
            jobs.with(|jobs| jobs.iter().find(|job| job.id == id).cloned())
        })
    });

    let prep_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let select_job = Callback::new(move |job: Job| {
        set_selected_job_id.set(Some(job.id));
    });

    let open_prep = Callback::new(move |job: Job| {
        set_selected_job_id.set(Some(job.id));
        if let Some(dialog) = prep_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let close_panel = Callback::new(move |_: ()| set_selected_job_id.set(None));

    view! {
        <div class="tracker-page" class:with-sidebar=move || selected_job.with(Option::is_some)>
            <div class="main-content">
                <KanbanTracker
                    jobs=jobs
                    on_update_status=update_status
                    on_select=select_job
                    on_prep=open_prep
                    config=config
                />
            </div>

            {move || {
                selected_job
                    .get()
                    .map(|job| view! { <JobDetailPanel job=job on_close=close_panel /> })
            }}

            <InterviewPrepModal job=selected_job dialog_ref=prep_dialog_ref />
        </div>
    }
}
