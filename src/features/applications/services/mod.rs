pub mod job_operations;

pub use job_operations::*;
