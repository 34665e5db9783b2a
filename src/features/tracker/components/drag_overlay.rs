use leptos::prelude::*;

use crate::features::tracker::components::JobCardBody;
use crate::features::tracker::hooks::DragHandle;
use crate::features::tracker::services::{Columns, LogoConfig};

/// Detached copy of the dragged card that follows the pointer. Not a drop
/// zone and not draggable.
#[component]
pub fn DragOverlay(
    drag: DragHandle,
    columns: Memo<Columns>,
    logos: StoredValue<LogoConfig>,
) -> impl IntoView {
    let overlay_style = move || {
        drag.coordinator
            .with(|c| c.overlay_rect())
            .map(|rect| {
                format!(
                    "left: {}px; top: {}px; width: {}px;",
                    rect.left, rect.top, rect.width
                )
            })
            .unwrap_or_default()
    };

    move || {
        drag.active_job.get().map(|job| {
            let show_prep = columns
                .with_untracked(|columns| columns.find_column_for_job(&job.id))
                .is_some_and(|status| status.offers_interview_prep());

            view! {
                <div class="drag-overlay" style=overlay_style>
                    <div class="job-card overlay-card">
                        <JobCardBody job=job logos=logos />
                        {show_prep.then(|| view! {
                            <div class="prep-badge">"✨ Prep for Interview"</div>
                        })}
                    </div>
                </div>
            }
        })
    }
}
