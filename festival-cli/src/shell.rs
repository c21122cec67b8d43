//! The main menu loop.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use festival_core::FestivalStore;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::commands::{self, Flow};
use crate::menu::{self, MenuChoice};
use crate::prompt::Prompt;

const FAREWELL: &str = "👋 Exiting Festival Reminder Bot. Goodbye!";

/// Show the menu and dispatch choices until Exit or end of input.
pub fn run(
    store: &mut FestivalStore,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
    today: impl Fn() -> NaiveDate,
) -> Result<()> {
    loop {
        writeln!(out, "{}", menu::render_menu())?;

        let Some(input) = prompt.ask(menu::PROMPT, out)? else {
            writeln!(out, "{FAREWELL}")?;
            return Ok(());
        };

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!("{e}");
                writeln!(out, "{}\n", "❌ Invalid choice! Please try again.".red())?;
                continue;
            }
        };

        let flow = match choice {
            MenuChoice::ViewAll => {
                commands::view::run(store, out)?;
                Flow::Continue
            }
            MenuChoice::Add => commands::add::run(store, prompt, out)?,
            MenuChoice::Delete => commands::delete::run(store, prompt, out)?,
            MenuChoice::CheckReminders => {
                commands::remind::run(store, today(), out)?;
                Flow::Continue
            }
            MenuChoice::Exit => Flow::Quit,
        };

        if flow == Flow::Quit {
            writeln!(out, "{FAREWELL}")?;
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompt;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn log_of_invalid_choice(filter: &str) -> String {
        let (_dir, mut store) = seeded_store();
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(log.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            run_with(&mut store, "x\n5\n", date(2025, 1, 1));
        });
        log.contents()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_store() -> (TempDir, FestivalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FestivalStore::open(dir.path().join("festivals.json")).unwrap();
        (dir, store)
    }

    fn run_with(store: &mut FestivalStore, input: &str, today: NaiveDate) -> String {
        let mut prompt = LinePrompt::new(input.as_bytes());
        let mut out = Vec::new();
        run(store, &mut prompt, &mut out, || today).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn invalid_choice_reprompts_then_view_then_exit() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "x\n1\n5\n", date(2025, 1, 1));

        let invalid = out.find("Invalid choice! Please try again.").unwrap();
        let listing = out.find("Saved Festivals:").unwrap();
        let goodbye = out.find("Goodbye!").unwrap();
        assert!(invalid < listing && listing < goodbye);
        assert_eq!(out.matches("FESTIVAL REMINDER BOT").count(), 3);
    }

    #[test]
    fn invalid_choice_is_silent_at_default_log_level() {
        assert!(log_of_invalid_choice("warn").is_empty());
        assert!(log_of_invalid_choice("debug").contains("invalid menu choice 'x'"));
    }

    #[test]
    fn exit_stops_reading_input() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "5\n1\n", date(2025, 1, 1));

        assert!(out.contains("Goodbye!"));
        assert!(!out.contains("Saved Festivals:"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "1\n", date(2025, 1, 1));

        assert!(out.contains("Saved Festivals:"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn add_persists_new_festival() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "2\n onam \n2025-09-05\n5\n", date(2025, 1, 1));

        assert!(out.contains("Onam added successfully!"));
        let reopened = FestivalStore::open(store.path()).unwrap();
        assert_eq!(reopened.get("onam").unwrap().date, date(2025, 9, 5));
    }

    #[test]
    fn add_duplicate_skips_the_date_prompt() {
        let (_dir, mut store) = seeded_store();

        // "5" is read as the next menu choice, not as a date.
        let out = run_with(&mut store, "2\nHOLI\n5\n", date(2025, 1, 1));

        assert!(out.contains("Festival already exists!"));
        assert!(!out.contains("Enter date"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn add_with_bad_date_changes_nothing() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "2\npongal\n2025-13-40\n5\n", date(2025, 1, 1));

        assert!(out.contains("Invalid date format! Use YYYY-MM-DD."));
        assert!(!store.contains("Pongal"));
    }

    #[test]
    fn end_of_input_mid_add_changes_nothing() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "2\nonam\n", date(2025, 1, 1));

        assert!(out.contains("Goodbye!"));
        assert!(!store.contains("Onam"));
    }

    #[test]
    fn delete_then_delete_again() {
        let (_dir, mut store) = seeded_store();

        let out = run_with(&mut store, "3\ndiwali\n3\ndiwali\n5\n", date(2025, 1, 1));

        let deleted = out.find("Diwali deleted successfully!").unwrap();
        let missing = out.find("Festival not found!").unwrap();
        assert!(deleted < missing);
        assert!(!store.contains("Diwali"));
    }

    #[test]
    fn view_on_empty_store() {
        let (_dir, mut store) = seeded_store();
        for name in ["Holi", "Ganesh Chaturthi", "Diwali", "Christmas"] {
            store.delete(name).unwrap();
        }

        let out = run_with(&mut store, "1\n5\n", date(2025, 1, 1));

        assert!(out.contains("No festivals saved yet."));
    }

    #[test]
    fn reminders_use_the_supplied_day() {
        let (_dir, mut store) = seeded_store();

        let week_before = run_with(&mut store, "4\n5\n", date(2025, 10, 13));
        assert!(week_before.contains("within the next 7 days:"));
        assert!(week_before.contains("Diwali"));

        let on_the_day = run_with(&mut store, "4\n5\n", date(2025, 10, 20));
        assert!(on_the_day.contains("TODAY is Diwali! Celebrate!"));
        assert!(on_the_day.contains("No upcoming festivals within the next 7 days."));
    }
}
