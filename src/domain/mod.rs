//! Domain types - pure changelog vocabulary independent of git and files

pub mod category;
pub mod entry;
pub mod tag;

pub use category::CommitCategory;
pub use entry::LogEntry;
pub use tag::{valid_version_tags, VersionTag, VERSION_PATTERN};
