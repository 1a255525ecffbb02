use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
    expected: String,
}

/// 年龄段（`All` 表示不过滤）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeGroup {
    #[default]
    All,
    Toddler,
    Preschool,
    Kids,
    Teens,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::All,
        AgeGroup::Toddler,
        AgeGroup::Preschool,
        AgeGroup::Kids,
        AgeGroup::Teens,
    ];

    /// 内容数据中使用的标签
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::All => "All",
            AgeGroup::Toddler => "Toddler",
            AgeGroup::Preschool => "Preschool",
            AgeGroup::Kids => "Kids",
            AgeGroup::Teens => "Teens",
        }
    }
}

/// 活动分类（`All` 表示不过滤）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Indoors,
    Outdoors,
    Creative,
    Active,
    Quiet,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Indoors,
        Category::Outdoors,
        Category::Creative,
        Category::Active,
        Category::Quiet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Indoors => "Indoors",
            Category::Outdoors => "Outdoors",
            Category::Creative => "Creative",
            Category::Active => "Active",
            Category::Quiet => "Mindful/Quiet",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Category::Quiet => "quiet",
            Category::Active => "active",
            Category::Creative => "creative",
            Category::Outdoors => "outdoors",
            Category::Indoors => "indoors",
            Category::All => "all",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeGroup {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseLabelError {
                kind: "age group",
                value: s.to_string(),
                expected: Self::ALL.map(|g| g.label()).join(", "),
            })
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(needle) || c.alias().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseLabelError {
                kind: "category",
                value: s.to_string(),
                expected: Self::ALL.map(|c| c.alias()).join(", "),
            })
    }
}

/// 一个活动点子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub title: String,
    pub category: Category,
    /// 保持字符串：内容数据里存在枚举之外的标签（如 "Tweens"）
    pub age_groups: Vec<String>,
}

impl Activity {
    pub fn new(title: impl Into<String>, category: Category, age_groups: &[&str]) -> Self {
        Self {
            title: title.into(),
            category,
            age_groups: age_groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    pub fn suits_age(&self, age: AgeGroup) -> bool {
        age == AgeGroup::All || self.age_groups.iter().any(|g| g == age.label())
    }

    pub fn in_category(&self, category: Category) -> bool {
        category == Category::All || self.category == category
    }
}

/// 一个对话问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 活动过滤条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub age: AgeGroup,
    pub category: Category,
}

impl ActivityFilter {
    pub fn is_active(&self) -> bool {
        self.age != AgeGroup::All || self.category != Category::All
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        activity.suits_age(self.age) && activity.in_category(self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("toddler".parse::<AgeGroup>().unwrap(), AgeGroup::Toddler);
        assert_eq!("Teens".parse::<AgeGroup>().unwrap(), AgeGroup::Teens);
        assert_eq!("quiet".parse::<Category>().unwrap(), Category::Quiet);
        assert_eq!("Mindful/Quiet".parse::<Category>().unwrap(), Category::Quiet);
        assert_eq!("OUTDOORS".parse::<Category>().unwrap(), Category::Outdoors);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "tweens".parse::<AgeGroup>().unwrap_err();
        assert!(err.to_string().contains("age group"));
        assert!(err.to_string().contains("Toddler"));
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let activity = Activity::new("Paper airplanes", Category::Creative, &["Kids", "Tweens"]);
        assert!(ActivityFilter::default().matches(&activity));
        assert!(!ActivityFilter::default().is_active());
    }
}
