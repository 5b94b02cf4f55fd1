pub mod record_store;
pub mod storage;

pub use record_store::{RecordStore, Snapshot};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
