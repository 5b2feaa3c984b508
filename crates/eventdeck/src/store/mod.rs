//! Blob store implementations backing the cache files.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;
