//! Key-value storage collaborators (in-memory and single-file JSON).

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::FlakyStore;
