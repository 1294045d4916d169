//! Core pattern record types.

pub mod pattern;
pub mod pitch;
pub mod resolution;
pub mod unit;

pub use pattern::Pattern;
pub use pitch::Pitch;
pub use resolution::Resolution;
pub use unit::Unit;
