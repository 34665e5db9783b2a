pub mod applications;
pub mod tracker;
