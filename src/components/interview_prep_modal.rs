use leptos::html::Dialog;
use leptos::prelude::*;

use crate::models::Job;

/// Talking points to rehearse before an interview for `job`.
pub fn prep_prompts(job: &Job) -> Vec<String> {
    let company = if job.company.is_empty() { "the company" } else { job.company.as_str() };
    let role = if job.title.is_empty() { "this role" } else { job.title.as_str() };
    vec![
        format!("Research {}'s products, customers and recent news.", company),
        format!("Prepare a two-minute story on why you want to be their {}.", role),
        format!("Re-read the {} posting and map each requirement to an example from your work.", role),
        String::from("Draft three questions to ask your interviewers."),
    ]
}

#[component]
pub fn InterviewPrepModal(
    #[prop(into)] job: Signal<Option<Job>>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal prep-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>
                        {move || job.with(|job| match job {
                            Some(job) => format!("Interview prep: {} at {}", job.title, job.company),
                            None => String::from("Interview prep"),
                        })}
                    </h2>
                    <button class="modal-close" on:click=close_modal>"x"</button>
                </div>
                <ul class="prep-list">
                    {move || job.with(|job| {
                        job.as_ref()
                            .map(prep_prompts)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|prompt| view! { <li>{prompt}</li> })
                            .collect_view()
                    })}
                </ul>
                <div class="modal-actions">
                    <button class="btn-primary" on:click=close_modal>"Done"</button>
                </div>
            </div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobStatus;

    #[test]
    fn prompts_mention_company_and_role() {
        let job = Job::new("Platform Engineer", "Stripe", JobStatus::Interviewing);
        let prompts = prep_prompts(&job);
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].contains("Stripe"));
        assert!(prompts[1].contains("Platform Engineer"));
    }

    #[test]
    fn prompts_degrade_without_details() {
        let job = Job::new("", "", JobStatus::Interviewing);
        let prompts = prep_prompts(&job);
        assert!(prompts[0].contains("the company"));
        assert!(prompts[1].contains("this role"));
    }
}
