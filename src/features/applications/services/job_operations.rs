use leptos::prelude::*;

use crate::models::{Job, JobId, JobStatus};
use crate::services::save_jobs;

/// Sample applications shown the first time the board opens.
pub fn seed_jobs() -> Vec<Job> {
    let mut hidden = Job::new("Data Analyst", "Initech", JobStatus::Applied);
    hidden.is_tracked = false;

    vec![
        Job::new("Frontend Engineer", "Vercel", JobStatus::Applied),
        Job::new("Rust Developer", "Mozilla", JobStatus::Applied),
        Job::new("Platform Engineer", "Stripe", JobStatus::Interviewing),
        Job::new("Software Engineer II", "Shopify", JobStatus::Offer),
        Job::new("Backend Engineer", "Acme Corp", JobStatus::Rejected),
        hidden,
    ]
}

/// Returns true if a job with `job_id` existed and was changed.
pub fn apply_status(jobs: &mut [Job], job_id: &JobId, status: JobStatus) -> bool {
    match jobs.iter_mut().find(|job| &job.id == job_id) {
        Some(job) => {
            job.set_status(status);
            true
        }
        None => false,
    }
}

// Update a job's status and persist the whole list
pub fn update_job_status(job_id: JobId, status: JobStatus, jobs_signal: RwSignal<Vec<Job>>) {
    // Only notify subscribers when a job actually changed
    let changed = jobs_signal
        .try_maybe_update(|jobs| {
            let changed = apply_status(jobs, &job_id, status);
            (changed, changed)
        })
        .unwrap_or(false);

    if !changed {
        web_sys::console::error_1(&format!("Job {} not found, status not updated", job_id).into());
        return;
    }

    let current_jobs = jobs_signal.get_untracked();
    if let Err(e) = save_jobs(&current_jobs) {
        web_sys::console::error_1(&format!("Failed to save jobs: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_status_rewrites_matching_job_only() {
        let mut jobs = seed_jobs();
        let target = jobs[0].id.clone();
        assert!(apply_status(&mut jobs, &target, JobStatus::Offer));
        assert_eq!(jobs[0].board_status(), Some(JobStatus::Offer));
        assert_eq!(jobs[1].board_status(), Some(JobStatus::Applied));
    }

    #[test]
    fn apply_status_reports_missing_job() {
        let mut jobs = seed_jobs();
        assert!(!apply_status(&mut jobs, &JobId::new("missing"), JobStatus::Offer));
    }

    #[test]
    fn seed_contains_one_untracked_job() {
        assert_eq!(seed_jobs().iter().filter(|job| !job.is_tracked).count(), 1);
    }
}
