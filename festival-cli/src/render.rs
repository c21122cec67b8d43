//! Terminal rendering for festival-core types.

use festival_core::{
    DATE_FORMAT, Festival, FestivalError, REMINDER_WINDOW_DAYS, ReminderReport, UpcomingFestival,
};
use owo_colors::OwoColorize;

/// Extension trait for coloured terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Festival {
    fn render(&self) -> String {
        format!("  • {} → {}", self.name.bold(), self.date.format(DATE_FORMAT))
    }
}

impl Render for UpcomingFestival {
    fn render(&self) -> String {
        format!(
            "  • {} in {} day(s)",
            self.festival.name.bold(),
            self.days_until.cyan()
        )
    }
}

/// The "view all" listing.
pub fn render_listing(festivals: &[Festival]) -> String {
    let mut lines = vec![format!("\n{}", "🎉 Saved Festivals:".bold())];
    lines.extend(festivals.iter().map(|f| f.render()));
    lines.join("\n")
}

/// Today notices followed by the upcoming list (or the "nothing coming up" line).
pub fn render_report(report: &ReminderReport) -> String {
    let mut lines: Vec<String> = report
        .today
        .iter()
        .map(|f| format!("🎊 TODAY is {}! Celebrate!", f.name).green().bold().to_string())
        .collect();

    match report.upcoming() {
        Ok(upcoming) => {
            let header = format!("🗓️ Festivals coming within the next {REMINDER_WINDOW_DAYS} days:");
            lines.push(format!("\n{}", header.bold()));
            lines.extend(upcoming.iter().map(|f| f.render()));
        }
        Err(e) => lines.push(format!("\n{}", render_error(&e))),
    }

    lines.join("\n")
}

/// User-facing message for a store error.
pub fn render_error(err: &FestivalError) -> String {
    match err {
        FestivalError::AlreadyExists(_) => "⚠️ Festival already exists!".yellow().to_string(),
        FestivalError::InvalidDate(_) => "❌ Invalid date format! Use YYYY-MM-DD.".red().to_string(),
        FestivalError::NotFound(_) => "❌ Festival not found!".red().to_string(),
        FestivalError::Empty => "📭 No festivals saved yet.".dimmed().to_string(),
        FestivalError::NoUpcoming(days) => format!("No upcoming festivals within the next {days} days.")
            .dimmed()
            .to_string(),
        other => format!("❌ {other}").red().to_string(),
    }
}
