pub mod use_jobs;

pub use use_jobs::*;
