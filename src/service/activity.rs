use anyhow::Result;

use crate::ui::Output;
use pocket_catalog::{Activity, ActivityFilter, AgeGroup, Category, ContentCatalog};

pub fn activity(age: AgeGroup, category: Category) -> Result<()> {
    let output = Output::new();
    let catalog = ContentCatalog::builtin();
    let filter = ActivityFilter { age, category };

    if filter.is_active() {
        output.status("Filter", &format!("age {}, category {}", age, category));
        eprintln!();
    }

    match catalog.pick_activity(&filter, &mut rand::thread_rng()) {
        Some(activity) => {
            output.card("Activity", &activity.title, Some(describe(activity).as_str()))
        }
        None => {
            output.info("No activities found for this combination. Try resetting your filters!")
        }
    }

    Ok(())
}

fn describe(activity: &Activity) -> String {
    format!("{} · {}", activity.category, activity.age_groups.join(", "))
}
