pub mod file_store;
pub mod manager;
pub mod memory_store;
pub mod traits;
