use anyhow::{Context, Result};
use uuid::Uuid;

use crate::ui::Output;
use pocket_types::{Memory, MemoryStore};

pub fn like(id: Uuid, force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();
    let scoped = super::open_store(force_local, force_global)?;

    output.status("Updating", &format!("memory {}", id));
    let memory = toggle(&scoped.store, id)?;

    if memory.is_liked {
        output.info("Added to liked moments ♥");
    } else {
        output.info("Removed from liked moments");
    }

    output.finish("like", scoped.scope);

    Ok(())
}

/// 切换喜欢状态，找不到时报错
pub fn toggle(store: &dyn MemoryStore, id: Uuid) -> Result<Memory> {
    store
        .toggle_like(id)
        .context("Failed to update memory")?
        .with_context(|| format!("Memory not found with ID: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_types::{InMemoryStore, MemoryBuilder};

    #[test]
    fn test_toggle_flips_only_target() {
        let a = Memory::new(MemoryBuilder {
            text: "a".to_string(),
            image: None,
        });
        let b = Memory::new(MemoryBuilder {
            text: "b".to_string(),
            image: Some(vec![9]),
        });
        let store = InMemoryStore::with_memories(vec![b.clone(), a.clone()]);

        let liked = toggle(&store, b.id).unwrap();

        assert!(liked.is_liked);
        let stored = store.load_all().unwrap();
        assert_eq!(stored[1], a);
        assert_eq!(stored[0].image, Some(vec![9]));
        assert_eq!(stored[0].text, "b");
    }

    #[test]
    fn test_toggle_unknown_id() {
        let store = InMemoryStore::new();
        let err = toggle(&store, Uuid::new_v4()).unwrap_err();
        assert!(err.to_string().contains("Memory not found"));
    }
}
