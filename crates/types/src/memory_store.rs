use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Memory;
use crate::storage::{apply_update, prepend_unique, toggle_like_in_place, MemoryStore};

/// 纯内存存储，用于测试或不需要落盘的场景
#[derive(Debug, Default)]
pub struct InMemoryStore {
    memories: Mutex<Vec<Memory>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memories(memories: Vec<Memory>) -> Self {
        Self {
            memories: Mutex::new(memories),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Memory>> {
        // 持锁期间不会 panic，中毒后数据仍然完整
        self.memories
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemoryStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Memory>, StoreError> {
        Ok(self.lock().clone())
    }

    fn save_all(&self, memories: &[Memory]) -> Result<(), StoreError> {
        *self.lock() = memories.to_vec();
        Ok(())
    }

    fn add(&self, memory: Memory) -> Result<(), StoreError> {
        prepend_unique(&mut self.lock(), memory)
    }

    fn update_by_id(&self, memory: &Memory) -> Result<bool, StoreError> {
        Ok(apply_update(&mut self.lock(), memory))
    }

    fn toggle_like(&self, id: Uuid) -> Result<Option<Memory>, StoreError> {
        Ok(toggle_like_in_place(&mut self.lock(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemoryBuilder;

    #[test]
    fn test_add_prepends() {
        let store = InMemoryStore::new();
        let first = Memory::new(MemoryBuilder {
            text: "first".to_string(),
            image: None,
        });
        let second = Memory::new(MemoryBuilder {
            text: "second".to_string(),
            image: None,
        });

        store.add(first.clone()).unwrap();
        store.add(second.clone()).unwrap();

        assert_eq!(store.load_all().unwrap(), vec![second, first]);
    }

    #[test]
    fn test_toggle_like_twice_restores() {
        let memory = Memory::new(MemoryBuilder {
            text: "x".to_string(),
            image: None,
        });
        let store = InMemoryStore::with_memories(vec![memory.clone()]);

        assert!(store.toggle_like(memory.id).unwrap().unwrap().is_liked);
        assert!(!store.toggle_like(memory.id).unwrap().unwrap().is_liked);
    }
}
