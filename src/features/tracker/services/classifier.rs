use crate::models::{Job, JobId, JobStatus};

/// Tracked jobs bucketed by status, in board order. Rebuilt from the job
/// list on every change; never edited in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Columns {
    buckets: [Vec<Job>; 4],
}

impl Columns {
    /// Untracked jobs are dropped. A missing status lands in Applied; an
    /// unrecognised one is left off the board entirely.
    pub fn classify(jobs: &[Job]) -> Self {
        let mut columns = Columns::default();
        for job in jobs.iter().filter(|job| job.is_tracked) {
            if let Some(status) = job.board_status() {
                columns.buckets[status.index()].push(job.clone());
            }
        }
        columns
    }

    pub fn jobs(&self, status: JobStatus) -> &[Job] {
        &self.buckets[status.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobStatus, &[Job])> + '_ {
        JobStatus::ALL.into_iter().map(move |status| (status, self.jobs(status)))
    }

    pub fn find_column_for_job(&self, job_id: &JobId) -> Option<JobStatus> {
        self.iter()
            .find(|(_, jobs)| jobs.iter().any(|job| &job.id == job_id))
            .map(|(status, _)| status)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, status: Option<&str>, tracked: bool) -> Job {
        Job {
            id: JobId::new(id),
            title: format!("Role {}", id),
            company: "Acme".into(),
            status: status.map(str::to_string),
            is_tracked: tracked,
            applied_at: None,
        }
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|job| job.id.as_str()).collect()
    }

    #[test]
    fn sample_board_excludes_untracked_job() {
        let columns = Columns::classify(&[
            job("1", Some("Applied"), true),
            job("2", Some("Interviewing"), true),
            job("3", Some("Offer"), false),
        ]);
        assert_eq!(ids(columns.jobs(JobStatus::Applied)), vec!["1"]);
        assert_eq!(ids(columns.jobs(JobStatus::Interviewing)), vec!["2"]);
        assert!(columns.jobs(JobStatus::Offer).is_empty());
        assert!(columns.jobs(JobStatus::Rejected).is_empty());
        assert_eq!(columns.find_column_for_job(&JobId::new("3")), None);
    }

    #[test]
    fn preserves_input_order_within_column() {
        let columns = Columns::classify(&[
            job("a", Some("Offer"), true),
            job("b", Some("Applied"), true),
            job("c", Some("Offer"), true),
            job("d", Some("Offer"), true),
        ]);
        assert_eq!(ids(columns.jobs(JobStatus::Offer)), vec!["a", "c", "d"]);
    }

    #[test]
    fn missing_status_defaults_to_applied() {
        let columns = Columns::classify(&[
            job("1", None, true),
            job("2", Some(""), true),
            job("3", None, false),
        ]);
        assert_eq!(ids(columns.jobs(JobStatus::Applied)), vec!["1", "2"]);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn unknown_status_is_invisible() {
        let columns = Columns::classify(&[job("1", Some("Ghosted"), true), job("2", Some("applied"), true)]);
        assert!(columns.is_empty());
    }

    #[test]
    fn every_tracked_job_lands_in_exactly_one_column() {
        let jobs: Vec<Job> = JobStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| job(&i.to_string(), Some(status.as_str()), true))
            .collect();
        let columns = Columns::classify(&jobs);
        for job in &jobs {
            let hits = columns.iter().filter(|(_, bucket)| bucket.contains(job)).count();
            assert_eq!(hits, 1);
            assert_eq!(columns.find_column_for_job(&job.id), job.board_status());
        }
    }
}
