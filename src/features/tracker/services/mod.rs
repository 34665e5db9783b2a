pub mod classifier;
pub mod drop_resolution;
pub mod logo;

pub use classifier::Columns;
pub use drop_resolution::resolve_status_change;
pub use logo::LogoConfig;
