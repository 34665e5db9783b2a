use crate::features::tracker::dnd::{DndId, DragEnd, StatusChange};

use super::classifier::Columns;

/// Turns a finished drag into a status change. Dropping nowhere, onto the
/// dragged card itself, or anywhere in the card's current column changes
/// nothing; the board never reorders within a column.
pub fn resolve_status_change(columns: &Columns, end: &DragEnd) -> Option<StatusChange> {
    let over = end.over.as_ref()?;
    if over == &end.active {
        return None;
    }

    let DndId::Job(job_id) = &end.active else {
        return None;
    };
    let from = columns.find_column_for_job(job_id)?;
    let to = match over {
        DndId::Column(status) => *status,
        DndId::Job(over_id) => columns.find_column_for_job(over_id)?,
    };

    (from != to).then(|| StatusChange { job_id: job_id.clone(), status: to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, JobId, JobStatus};

    fn columns() -> Columns {
        let job = |id: &str, status: JobStatus| Job {
            id: JobId::new(id),
            title: String::new(),
            company: String::new(),
            status: Some(status.as_str().into()),
            is_tracked: true,
            applied_at: None,
        };
        Columns::classify(&[
            job("1", JobStatus::Applied),
            job("2", JobStatus::Interviewing),
            job("4", JobStatus::Interviewing),
            job("5", JobStatus::Offer),
        ])
    }

    fn end(active: &str, over: Option<DndId>) -> DragEnd {
        DragEnd { active: DndId::Job(JobId::new(active)), over }
    }

    #[test]
    fn drop_on_other_column_changes_status() {
        let change = resolve_status_change(&columns(), &end("1", Some(DndId::Column(JobStatus::Interviewing))));
        assert_eq!(
            change,
            Some(StatusChange { job_id: JobId::new("1"), status: JobStatus::Interviewing })
        );
    }

    #[test]
    fn drop_on_card_in_other_column_uses_that_column() {
        let change = resolve_status_change(&columns(), &end("2", Some(DndId::Job(JobId::new("5")))));
        assert_eq!(change.map(|c| c.status), Some(JobStatus::Offer));
    }

    #[test]
    fn same_column_drops_are_noops() {
        let columns = columns();
        assert_eq!(resolve_status_change(&columns, &end("2", Some(DndId::Job(JobId::new("4"))))), None);
        assert_eq!(
            resolve_status_change(&columns, &end("2", Some(DndId::Column(JobStatus::Interviewing)))),
            None
        );
        assert_eq!(resolve_status_change(&columns, &end("2", Some(DndId::Job(JobId::new("2"))))), None);
    }

    #[test]
    fn unresolvable_drops_are_noops() {
        let columns = columns();
        assert_eq!(resolve_status_change(&columns, &end("1", None)), None);
        assert_eq!(resolve_status_change(&columns, &end("1", Some(DndId::Job(JobId::new("99"))))), None);
        assert_eq!(
            resolve_status_change(&columns, &end("99", Some(DndId::Column(JobStatus::Offer)))),
            None
        );
        let column_drag = DragEnd {
            active: DndId::Column(JobStatus::Applied),
            over: Some(DndId::Column(JobStatus::Offer)),
        };
        assert_eq!(resolve_status_change(&columns, &column_drag), None);
    }
}
