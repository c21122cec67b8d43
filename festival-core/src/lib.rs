//! Core types for festival-reminder.
//!
//! - `FestivalStore`: the persisted name → date mapping and its queries
//! - `Festival` and name/date normalisation helpers
//! - `ReminderReport` for the upcoming-within-a-week query
//! - `AppConfig` for the optional config.toml

pub mod config;
pub mod error;
pub mod festival;
pub mod reminder;
pub mod store;

pub use config::AppConfig;
pub use error::{FestivalError, FestivalResult};
pub use festival::{DATE_FORMAT, Festival, normalize_name, parse_date};
pub use reminder::{REMINDER_WINDOW_DAYS, ReminderReport, UpcomingFestival};
pub use store::FestivalStore;
