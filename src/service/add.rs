use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Input;
use tracing::info;

use crate::ui::Output;
use pocket_types::{Memory, MemoryBuilder, MemoryStore};

pub fn add(
    text: Option<String>,
    image: Option<PathBuf>,
    force_local: bool,
    force_global: bool,
) -> Result<()> {
    let output = Output::new();
    let scoped = super::open_store(force_local, force_global)?;

    let text = match text {
        Some(text) => text,
        None => Input::<String>::new()
            .with_prompt("What happened?")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read memory text")?,
    };

    let image = image
        .map(|path| {
            std::fs::read(&path)
                .with_context(|| format!("Failed to read image: {}", path.display()))
        })
        .transpose()?;

    output.status("Saving", "memory");
    let memory = add_memory(&scoped.store, &text, image)?;
    output.info(&format!("Saved memory {}", memory.id));

    output.finish("add", scoped.scope);

    Ok(())
}

/// 校验文本并保存一条新记忆（文本为空时拒绝，不会触达存储）
pub fn add_memory(store: &dyn MemoryStore, text: &str, image: Option<Vec<u8>>) -> Result<Memory> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Memory text cannot be empty");
    }

    let memory = Memory::new(MemoryBuilder {
        text: text.to_string(),
        image,
    });
    store
        .add(memory.clone())
        .context("Failed to save memory")?;

    info!(id = %memory.id, "memory added");
    Ok(memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_types::InMemoryStore;

    #[test]
    fn test_empty_text_rejected() {
        let store = InMemoryStore::new();

        assert!(add_memory(&store, "", None).is_err());
        assert!(add_memory(&store, "   \n", None).is_err());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_add_memory_saves_trimmed_text_and_image() {
        let store = InMemoryStore::new();

        let memory = add_memory(&store, "  Built a pillow fort \n", Some(vec![1, 2, 3])).unwrap();

        assert_eq!(memory.text, "Built a pillow fort");
        assert!(!memory.is_liked);
        assert_eq!(store.load_all().unwrap(), vec![memory]);
    }
}
