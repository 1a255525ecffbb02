use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::{ACTIVITIES, QUESTIONS};
use crate::models::{Activity, ActivityFilter, Question};

/// 只读内容目录
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    activities: Vec<Activity>,
    questions: Vec<Question>,
}

impl ContentCatalog {
    pub fn new(activities: Vec<Activity>, questions: Vec<Question>) -> Self {
        Self {
            activities,
            questions,
        }
    }

    /// 随应用发布的内置目录
    pub fn builtin() -> Self {
        let activities = ACTIVITIES
            .iter()
            .map(|(title, category, ages)| Activity::new(*title, *category, ages))
            .collect();
        let questions = QUESTIONS.iter().map(|text| Question::new(*text)).collect();
        Self::new(activities, questions)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 返回满足所有过滤条件的活动
    pub fn filter_activities(&self, filter: &ActivityFilter) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|activity| filter.matches(activity))
            .collect()
    }

    /// 从过滤结果中等概率随机挑一个，没有匹配时返回 `None`
    pub fn pick_activity<R: Rng + ?Sized>(
        &self,
        filter: &ActivityFilter,
        rng: &mut R,
    ) -> Option<&Activity> {
        self.filter_activities(filter).choose(rng).copied()
    }

    /// 每日一问：年内序号（1 起）对目录长度取模
    ///
    /// 同一日历日对所有用户返回同一个问题。
    pub fn question_of_the_day(&self, date: NaiveDate) -> Option<&Question> {
        if self.questions.is_empty() {
            return None;
        }
        let index = date.ordinal() as usize % self.questions.len();
        self.questions.get(index)
    }

    /// 随机问题，尽量避免与上一个重复
    pub fn random_question<R: Rng + ?Sized>(
        &self,
        last: Option<&Question>,
        rng: &mut R,
    ) -> Option<&Question> {
        let pool: Vec<&Question> = match last {
            Some(last) if self.questions.len() > 1 => {
                self.questions.iter().filter(|q| *q != last).collect()
            }
            _ => self.questions.iter().collect(),
        };
        // 目录里全是同一个问题时，过滤后可能为空
        if pool.is_empty() {
            return self.questions.choose(rng);
        }
        pool.choose(rng).copied()
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeGroup, Category};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_catalog() -> ContentCatalog {
        ContentCatalog::new(
            vec![
                Activity::new("Find 5 red things", Category::Indoors, &["Toddler", "Preschool"]),
                Activity::new("Watch the clouds", Category::Outdoors, &["Preschool", "Kids"]),
                Activity::new("Dance party", Category::Active, &["Toddler", "Teens"]),
                Activity::new("House of cards", Category::Quiet, &["Kids", "Teens"]),
            ],
            vec![
                Question::new("first"),
                Question::new("second"),
                Question::new("third"),
            ],
        )
    }

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = ContentCatalog::builtin();

        assert_eq!(catalog.activities().len(), 55);
        assert_eq!(catalog.questions().len(), 35);
        assert!(catalog.activities().iter().all(|a| !a.title.is_empty()));
        assert!(catalog.questions().iter().all(|q| !q.text.is_empty()));
    }

    #[test]
    fn test_filter_by_age_ignores_category_all() {
        let catalog = small_catalog();
        let filter = ActivityFilter {
            age: AgeGroup::Toddler,
            category: Category::All,
        };

        let titles: Vec<&str> = catalog
            .filter_activities(&filter)
            .iter()
            .map(|a| a.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Find 5 red things", "Dance party"]);
    }

    #[test]
    fn test_filter_builtin_toddler() {
        let catalog = ContentCatalog::builtin();
        let filter = ActivityFilter {
            age: AgeGroup::Toddler,
            category: Category::All,
        };

        let matched = catalog.filter_activities(&filter);

        assert!(!matched.is_empty());
        assert!(matched
            .iter()
            .all(|a| a.age_groups.iter().any(|g| g == "Toddler")));
    }

    #[test]
    fn test_filter_combines_predicates() {
        let catalog = small_catalog();
        let filter = ActivityFilter {
            age: AgeGroup::Teens,
            category: Category::Quiet,
        };

        let matched = catalog.filter_activities(&filter);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "House of cards");
    }

    #[test]
    fn test_pick_activity_no_match() {
        let catalog = small_catalog();
        let filter = ActivityFilter {
            age: AgeGroup::Toddler,
            category: Category::Quiet,
        };
        let mut rng = StdRng::seed_from_u64(7);

        assert!(catalog.pick_activity(&filter, &mut rng).is_none());
    }

    #[test]
    fn test_pick_activity_stays_in_subset() {
        let catalog = small_catalog();
        let filter = ActivityFilter {
            age: AgeGroup::Preschool,
            category: Category::All,
        };
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let picked = catalog.pick_activity(&filter, &mut rng).unwrap();
            assert!(picked.suits_age(AgeGroup::Preschool));
        }
    }

    #[test]
    fn test_question_of_the_day_ordinal_modulo() {
        let catalog = small_catalog();
        // 2025-10-29 是第 302 天，302 % 3 = 2
        let date = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap();
        assert_eq!(date.ordinal(), 302);

        let question = catalog.question_of_the_day(date).unwrap();

        assert_eq!(question.text, "third");
    }

    #[test]
    fn test_question_of_the_day_is_deterministic() {
        let catalog = ContentCatalog::builtin();
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        assert_eq!(
            catalog.question_of_the_day(date),
            catalog.question_of_the_day(date)
        );
    }

    #[test]
    fn test_question_of_the_day_empty_catalog() {
        let catalog = ContentCatalog::new(vec![], vec![]);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(catalog.question_of_the_day(date).is_none());
    }

    #[test]
    fn test_random_question_avoids_repeat() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let last = Question::new("second");

        for _ in 0..50 {
            let next = catalog.random_question(Some(&last), &mut rng).unwrap();
            assert_ne!(next, &last);
        }
    }

    #[test]
    fn test_random_question_single_entry_repeats() {
        let only = Question::new("only one");
        let catalog = ContentCatalog::new(vec![], vec![only.clone()]);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(catalog.random_question(Some(&only), &mut rng), Some(&only));
    }
}
