use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A tracked follow-up item (application step, report due date, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub title: String,
    pub deadline: Option<String>,
    pub owner: String,
    pub status: String,
}

impl Task {
    fn is_done(&self) -> bool {
        matches!(self.status.to_lowercase().as_str(), "done" | "completed")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReminderReport {
    pub now: DateTime<Utc>,
    pub due_within_days: i64,
    pub upcoming: Vec<Task>,
}

/// Returns tasks due within the next `days_ahead` days, skipping finished
/// ones. Unparseable deadlines are silently excluded.
pub fn upcoming_tasks(tasks: &[Task], days_ahead: i64, clock: &dyn Clock) -> ReminderReport {
    let today = clock.today();
    let horizon = today + Duration::days(days_ahead.max(0));

    let upcoming = tasks
        .iter()
        .filter(|task| !task.is_done())
        .filter(|task| {
            task.deadline
                .as_deref()
                .and_then(parse_deadline)
                .is_some_and(|due| today <= due && due <= horizon)
        })
        .cloned()
        .collect();

    ReminderReport { now: clock.now(), due_within_days: days_ahead, upcoming }
}

fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    raw.parse::<NaiveDate>()
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
}
