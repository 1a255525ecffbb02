//! Pocket Catalog - 活动点子与对话问题
//!
//! 只读的内置目录，以及基于它的随机挑选和 "每日一问"。

mod catalog;
mod content;
mod models;

pub use catalog::ContentCatalog;
pub use models::{Activity, ActivityFilter, AgeGroup, Category, ParseLabelError, Question};
