pub mod cleaner;
pub mod error;
pub mod gid;
pub mod map;
pub mod position;
pub mod report;
