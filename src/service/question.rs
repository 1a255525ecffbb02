use anyhow::Result;
use chrono::Local;

use crate::ui::Output;
use pocket_catalog::ContentCatalog;

pub fn question(random: bool) -> Result<()> {
    let output = Output::new();
    let catalog = ContentCatalog::builtin();

    // 按本地日历日计算，午夜切换
    let today = Local::now().date_naive();
    let daily = catalog.question_of_the_day(today);

    let (heading, picked) = if random {
        ("Random", catalog.random_question(daily, &mut rand::thread_rng()))
    } else {
        ("Today", daily)
    };

    match picked {
        Some(question) => output.card(heading, &question.text, None),
        None => output.info("No questions available."),
    }

    Ok(())
}
