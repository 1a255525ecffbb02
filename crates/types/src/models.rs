use chrono::{DateTime, Datelike, Local, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 核心记忆数据结构（完全独立，不依赖任何存储）
///
/// JSON 字段名与已有的 `memories.json` 保持一致：
/// `id`、`text`、`date`、`imageData`、`isLiked`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: Uuid,
    pub text: String,
    /// 秒级精度写出（`2025-10-29T08:15:00Z`），读取时也接受小数秒
    #[serde(with = "date_seconds")]
    pub date: DateTime<Utc>,
    #[serde(
        rename = "imageData",
        alias = "image",
        default,
        with = "image_base64",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Vec<u8>>,
    #[serde(default)]
    pub is_liked: bool,
}

/// 用于构建 Memory 的 Builder
pub struct MemoryBuilder {
    pub text: String,
    pub image: Option<Vec<u8>>,
}

impl Memory {
    pub fn new(builder: MemoryBuilder) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: builder.text,
            // 与秒级存储格式保持一致，保证读写往返相等
            date: Utc::now().trunc_subsecs(0),
            image: builder.image,
            is_liked: false,
        }
    }

    /// 是否属于本地日历的某年某月
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        let local = self.date.with_timezone(&Local);
        local.year() == year && local.month() == month
    }
}

/// 列表过滤条件（按月份 / 只看喜欢的）
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryFilter {
    pub month: Option<(i32, u32)>,
    pub liked_only: bool,
}

impl MemoryFilter {
    pub fn matches(&self, memory: &Memory) -> bool {
        if self.liked_only && !memory.is_liked {
            return false;
        }
        match self.month {
            Some((year, month)) => memory.is_in_month(year, month),
            None => true,
        }
    }
}

/// 按创建时间倒序排列（最新的在前）
pub fn sort_newest_first(memories: &mut [Memory]) {
    memories.sort_by(|a, b| b.date.cmp(&a.date));
}

mod date_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

mod image_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
