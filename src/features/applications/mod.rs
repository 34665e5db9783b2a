pub mod hooks;
pub mod services;

pub use hooks::*;
