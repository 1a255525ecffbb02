//! Pocket Types - 记忆数据模型与存储接口
//!
//! 这个 crate 只定义数据结构和 `MemoryStore` trait，
//! 不依赖任何具体的存储实现。

mod error;
mod memory_store;
mod models;
mod storage;

pub use error::StoreError;
pub use memory_store::InMemoryStore;
pub use models::{sort_newest_first, Memory, MemoryBuilder, MemoryFilter};
pub use storage::{apply_update, prepend_unique, toggle_like_in_place, MemoryStore, StorageConfig};
