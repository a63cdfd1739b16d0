pub mod storage;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub mod persistent_state;
pub use persistent_state::PersistentState;
pub mod collection_repo;
pub use collection_repo::{CollectionRepository, Entity};
pub mod collections;
pub use collections::CareCollections;
