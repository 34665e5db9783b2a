pub mod interview_prep_modal;
pub mod job_detail_panel;

pub use interview_prep_modal::InterviewPrepModal;
pub use job_detail_panel::JobDetailPanel;
