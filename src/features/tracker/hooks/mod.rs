pub mod use_drag;

pub use use_drag::*;
