pub mod offset;
pub mod person;
pub mod position;
pub mod status;
