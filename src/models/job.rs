use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::BoardError;

/// Stable job identifier. Backends hand out both numeric and string ids,
/// so both are accepted and normalised to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => JobId(s),
            RawId::Number(n) => JobId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Board order, left to right.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    pub fn title(&self) -> &'static str {
        self.as_str()
    }

    /// CSS class of the dot next to the column title.
    pub fn accent_class(&self) -> &'static str {
        match self {
            JobStatus::Applied => "accent-sky",
            JobStatus::Interviewing => "accent-purple",
            JobStatus::Offer => "accent-emerald",
            JobStatus::Rejected => "accent-red",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            JobStatus::Applied => 0,
            JobStatus::Interviewing => 1,
            JobStatus::Offer => 2,
            JobStatus::Rejected => 3,
        }
    }

    pub fn offers_interview_prep(&self) -> bool {
        matches!(self, JobStatus::Interviewing)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BoardError::UnknownStatus(s.to_string()))
    }
}

/// A job application record as handed to the board by its owner.
///
/// `status` is kept as the raw string the backend sent: an unknown value must
/// stay unknown so the board can leave the job out instead of guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_tracked: bool,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(title: impl Into<String>, company: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: JobId::new(Uuid::new_v4().to_string()),
            title: title.into(),
            company: company.into(),
            status: Some(status.as_str().to_string()),
            is_tracked: true,
            applied_at: Some(Utc::now()),
        }
    }

    /// Column the job belongs on. A missing or empty status means Applied,
    /// an unrecognised one yields `None`.
    pub fn board_status(&self) -> Option<JobStatus> {
        match self.status.as_deref() {
            None | Some("") => Some(JobStatus::Applied),
            Some(raw) => raw.parse().ok(),
        }
    }

    pub fn set_status(&mut self, status: JobStatus) {
        self.status = Some(status.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_string_ids() {
        let jobs: Vec<Job> = serde_json::from_str(
            r#"[{"id":1,"title":"Engineer","company":"Acme","status":"Applied","is_tracked":true},
                {"id":"abc","title":"Designer","company":"Globex","is_tracked":false}]"#,
        )
        .unwrap();
        assert_eq!(jobs[0].id, JobId::new("1"));
        assert_eq!(jobs[1].id, JobId::new("abc"));
        assert_eq!(jobs[1].status, None);
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let job: Job = serde_json::from_str(r#"{"id":7,"status":null}"#).unwrap();
        assert_eq!(job.company, "");
        assert!(!job.is_tracked);
        assert_eq!(job.board_status(), Some(JobStatus::Applied));
    }

    #[test]
    fn status_parsing_is_exact() {
        assert_eq!("Offer".parse::<JobStatus>().unwrap(), JobStatus::Offer);
        assert!("offer".parse::<JobStatus>().is_err());
        assert!("Ghosted".parse::<JobStatus>().is_err());
    }

    #[test]
    fn board_status_handles_empty_and_unknown() {
        let mut job = Job::new("Engineer", "Acme", JobStatus::Offer);
        assert_eq!(job.board_status(), Some(JobStatus::Offer));
        job.status = Some(String::new());
        assert_eq!(job.board_status(), Some(JobStatus::Applied));
        job.status = Some("Ghosted".into());
        assert_eq!(job.board_status(), None);
    }

    #[test]
    fn only_interviewing_offers_prep() {
        let with_prep: Vec<_> = JobStatus::ALL
            .into_iter()
            .filter(JobStatus::offers_interview_prep)
            .collect();
        assert_eq!(with_prep, vec![JobStatus::Interviewing]);
    }
}
