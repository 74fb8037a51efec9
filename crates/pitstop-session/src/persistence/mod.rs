//! Session persistence backends implementing `ISessionPersistence`.

mod json_file;
mod memory;

pub use json_file::JsonFilePersistence;
pub use memory::MemoryPersistence;
