pub mod lateness;
pub mod roster;
pub mod stats;
