use chrono::Local;
use console::Style;
use std::path::Path;

use pocket_types::Memory;

/// 命令行输出格式化工具
/// 提供统一的 Cargo 风格输出
pub struct Output {
    green: Style,
    bold: Style,
    dim: Style,
}

impl Output {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            bold: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// 显示状态消息（如 "Saving memory" 等）
    /// 格式: "      Saving memory"（动词右对齐到 12 字符）
    pub fn status(&self, action: &str, target: &str) {
        eprintln!("{:>12} {}", self.green.apply_to(action), target);
    }

    /// 显示存储信息
    /// 格式: "       Store /path/to/memories.json (12 memories)"
    /// 自动在后面添加空行
    pub fn store_info(&self, path: &Path, record_count: usize) {
        eprintln!(
            "{:>12} {} {}",
            self.green.apply_to("Store"),
            path.display(),
            self.dim.apply_to(format!("({} memories)", record_count))
        );
        eprintln!();
    }

    /// 显示创建/查找资源消息
    /// 格式: "    Creating config at /path/to/config"
    pub fn resource_action(&self, action: &str, resource: &str, path: &Path) {
        eprintln!(
            "{:>12} {} at {}",
            self.green.apply_to(action),
            resource,
            path.display()
        );
    }

    /// 显示完成消息
    /// 格式: "    Finished action for scope"
    /// 自动在前面添加空行
    pub fn finish(&self, action: &str, scope: &str) {
        eprintln!();
        eprintln!(
            "{:>12} {} for {} scope",
            self.green.apply_to("Finished"),
            action,
            scope
        );
    }

    /// 显示单条记忆
    /// 格式: "[1/5] id (date) ♥ [photo]"
    ///       "      Text line 1"
    fn memory_item(&self, label: &str, memory: &Memory) {
        let date = memory
            .date
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();

        let liked_part = if memory.is_liked {
            format!(" {}", Style::new().magenta().apply_to("♥"))
        } else {
            String::new()
        };

        let photo_part = match &memory.image {
            Some(bytes) => {
                let size = format!("[photo {} KB]", bytes.len().div_ceil(1024));
                format!(" {}", self.dim.apply_to(size))
            }
            None => String::new(),
        };

        println!(
            "[{}] {} {}{}{}",
            self.dim.apply_to(label),
            self.bold.apply_to(memory.id),
            self.dim.apply_to(format!("({})", date)),
            liked_part,
            photo_part
        );

        let indent = " ".repeat(label.len() + 3);
        for line in memory.text.lines() {
            println!("{}{}", indent, line);
        }
    }

    /// 显示记忆列表，第一条作为 "最新时刻" 单独标注
    pub fn memory_list(&self, memories: &[Memory]) {
        let total = memories.len();
        for (i, memory) in memories.iter().enumerate() {
            if i == 0 {
                eprintln!("{:>12}", self.green.apply_to("Newest"));
            } else if i == 1 {
                eprintln!();
                eprintln!("{:>12}", self.green.apply_to("Recent"));
            }

            self.memory_item(&format!("{}/{}", i + 1, total), memory);

            if i > 0 && i < total - 1 {
                println!();
            }
        }
    }

    /// 显示单条记忆详情
    pub fn memory_detail(&self, memory: &Memory) {
        self.memory_item("1/1", memory);
    }

    /// 显示一张 "卡片"（活动点子或问题）
    pub fn card(&self, heading: &str, text: &str, detail: Option<&str>) {
        eprintln!("{:>12}", self.green.apply_to(heading));
        println!("{:>12} {}", "", self.bold.apply_to(text));
        if let Some(detail) = detail {
            println!("{:>12} {}", "", self.dim.apply_to(detail));
        }
    }

    /// 显示注意事项（右对齐）
    pub fn note(&self, message: &str) {
        eprintln!("{:>12} {}", self.dim.apply_to("Note"), message);
    }

    /// 显示警告（黄色，右对齐）
    pub fn warning(&self, message: &str) {
        eprintln!(
            "{:>12} {}",
            Style::new().yellow().bold().apply_to("Warning"),
            message
        );
    }

    /// 显示错误（红色，右对齐）
    pub fn error(&self, message: &str) {
        eprintln!(
            "{:>12} {}",
            Style::new().red().bold().apply_to("Error"),
            message
        );
    }

    /// 显示提示消息（标准输出，右对齐）
    pub fn info(&self, message: &str) {
        println!("{:>12} {}", "", message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
