pub mod file;
pub mod snapshot;

pub use file::RosterFile;
