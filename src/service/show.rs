use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::ui::Output;
use pocket_types::MemoryStore;

pub fn show(
    id: Uuid,
    export_image: Option<PathBuf>,
    force_local: bool,
    force_global: bool,
) -> Result<()> {
    let output = Output::new();
    let scoped = super::open_store(force_local, force_global)?;

    output.status("Finding", &format!("memory {}", id));

    let memory = scoped
        .store
        .find_by_id(id)
        .context("Failed to load memories")?
        .with_context(|| format!("Memory not found with ID: {}", id))?;

    eprintln!();
    output.memory_detail(&memory);

    if let Some(path) = export_image {
        let bytes = memory
            .image
            .as_deref()
            .with_context(|| format!("Memory {} has no photo", id))?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write image: {}", path.display()))?;

        eprintln!();
        output.resource_action("Exported", "photo", &path);
    }

    Ok(())
}
