//! Reminders for festivals happening today or within the coming week.

use chrono::NaiveDate;

use crate::error::{FestivalError, FestivalResult};
use crate::festival::Festival;

/// Upcoming festivals are those 1..=REMINDER_WINDOW_DAYS days away.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// A festival inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingFestival {
    pub festival: Festival,
    pub days_until: i64,
}

/// Result of checking the store against a reference date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderReport {
    /// Festivals falling on the reference date.
    pub today: Vec<Festival>,
    /// Festivals within the window, nearest first.
    pub upcoming: Vec<UpcomingFestival>,
}

impl ReminderReport {
    /// Classify festivals relative to `today`. Past festivals are dropped.
    pub fn build<'a>(festivals: impl IntoIterator<Item = &'a Festival>, today: NaiveDate) -> Self {
        let mut report = ReminderReport::default();

        for festival in festivals {
            let days_until = festival.days_from(today);
            if days_until == 0 {
                report.today.push(festival.clone());
            } else if (1..=REMINDER_WINDOW_DAYS).contains(&days_until) {
                report.upcoming.push(UpcomingFestival {
                    festival: festival.clone(),
                    days_until,
                });
            }
        }

        // Stable sort keeps name order for festivals on the same day.
        report.upcoming.sort_by_key(|u| u.days_until);
        report
    }

    /// The upcoming list, or `NoUpcoming` when nothing is in the window.
    pub fn upcoming(&self) -> FestivalResult<&[UpcomingFestival]> {
        if self.upcoming.is_empty() {
            Err(FestivalError::NoUpcoming(REMINDER_WINDOW_DAYS))
        } else {
            Ok(&self.upcoming)
        }
    }
}
