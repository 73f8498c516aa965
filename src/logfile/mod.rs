//! Named log-file management
//!
//! [`LogFileManager`] keeps a map of open log files keyed by path and
//! writes timestamped lines to them. It is a plain resource-management
//! utility with no concurrency; wrap it in a lock if multiple threads need
//! to share one manager.

mod manager;

pub use manager::LogFileManager;
