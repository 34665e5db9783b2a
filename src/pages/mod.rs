pub mod tracker;

pub use tracker::TrackerPage;
