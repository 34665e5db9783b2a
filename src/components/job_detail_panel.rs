use leptos::prelude::*;

use crate::models::Job;

#[component]
pub fn JobDetailPanel(job: Job, on_close: Callback<()>) -> impl IntoView {
    let status = match (job.board_status(), job.status.as_deref()) {
        (Some(status), _) => status.to_string(),
        (None, Some(raw)) => format!("{} (not on board)", raw),
        (None, None) => String::from("Unknown"),
    };
    let applied = job
        .applied_at
        .map(|at| at.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| String::from("-"));

    view! {
        <aside class="job-detail-panel">
            <div class="sidebar-header">
                <h2>{job.title.clone()}</h2>
                <button class="modal-close" on:click=move |_| on_close.run(())>"x"</button>
            </div>
            <dl class="job-detail-fields">
                <dt>"Company"</dt>
                <dd>{job.company.clone()}</dd>
                <dt>"Status"</dt>
                <dd>{status}</dd>
                <dt>"Applied"</dt>
                <dd>{applied}</dd>
                <dt>"Tracked"</dt>
                <dd>{if job.is_tracked { "Yes" } else { "No" }}</dd>
            </dl>
        </aside>
    }
}
