pub mod actor_directory;
pub mod append_entry;
pub mod find_by_actor;
pub mod find_by_record;
pub mod load_entry;
pub mod pagination;
pub mod persist;
pub mod remove;
pub mod search_entries;

// Re-exports
pub use actor_directory::*;
pub use append_entry::*;
pub use find_by_actor::*;
pub use find_by_record::*;
pub use load_entry::*;
pub use pagination::*;
pub use persist::*;
pub use remove::*;
pub use search_entries::*;
