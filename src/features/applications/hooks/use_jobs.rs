use leptos::prelude::*;

use crate::features::applications::services::{seed_jobs, update_job_status};
use crate::models::{Job, JobId, JobStatus};
use crate::services::{load_jobs, save_jobs};

pub struct JobsHook {
    pub jobs: ReadSignal<Vec<Job>>,
    pub update_status: Callback<(JobId, JobStatus)>,
}

fn initial_jobs() -> Vec<Job> {
    match load_jobs() {
        Ok(Some(jobs)) => jobs,
        Ok(None) => {
            let jobs = seed_jobs();
            if let Err(e) = save_jobs(&jobs) {
                web_sys::console::error_1(&format!("Failed to save seed jobs: {}", e).into());
            }
            jobs
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load jobs, using samples: {}", e).into());
            seed_jobs()
        }
    }
}

pub fn use_jobs() -> JobsHook {
    let jobs = RwSignal::new(initial_jobs());

    let update_status = Callback::new(move |(job_id, status): (JobId, JobStatus)| {
        update_job_status(job_id, status, jobs);
    });

    JobsHook {
        jobs: jobs.read_only(),
        update_status,
    }
}
