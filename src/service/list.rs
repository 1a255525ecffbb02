use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::ui::Output;
use pocket_types::{sort_newest_first, Memory, MemoryFilter, MemoryStore};

pub fn list(
    month: Option<&str>,
    liked: bool,
    limit: Option<usize>,
    force_local: bool,
    force_global: bool,
) -> Result<()> {
    let output = Output::new();

    let filter = MemoryFilter {
        month: month.map(parse_month).transpose()?,
        liked_only: liked,
    };

    let scoped = super::open_store(force_local, force_global)?;

    // 文件损坏时降级为空列表，但明确提示，且不改动文件
    let memories = match scoped.store.load_all() {
        Ok(memories) => memories,
        Err(e) if e.is_corrupt() => {
            output.warning(&e.to_string());
            output.note(
                "the file is left untouched; new memories cannot be saved until it is repaired",
            );
            Vec::new()
        }
        Err(e) => return Err(e).context("Failed to load memories"),
    };

    output.store_info(scoped.store.path(), memories.len());

    let limit = limit.unwrap_or(scoped.config.list_limit);
    let selected = select_memories(memories, &filter, limit);

    if selected.is_empty() {
        if filter.month.is_some() || filter.liked_only {
            output.info("No memories match these filters.");
        } else {
            output.info("No memories yet. Use 'pocket add' to save one!");
        }
        return Ok(());
    }

    output.memory_list(&selected);

    Ok(())
}

/// 解析 "YYYY-MM" 格式的月份
pub fn parse_month(value: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", value))?;
    Ok((date.year(), date.month()))
}

/// 过滤、按时间倒序、截断（limit 为 0 表示不限制）
pub fn select_memories(
    mut memories: Vec<Memory>,
    filter: &MemoryFilter,
    limit: usize,
) -> Vec<Memory> {
    memories.retain(|memory| filter.matches(memory));
    sort_newest_first(&mut memories);
    if limit > 0 {
        memories.truncate(limit);
    }
    memories
}
