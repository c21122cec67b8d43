use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use festival_core::FestivalStore;

use crate::render::render_report;

pub fn run(store: &FestivalStore, today: NaiveDate, out: &mut impl Write) -> Result<()> {
    let report = store.check_reminders(today);
    writeln!(out, "{}\n", render_report(&report))?;
    Ok(())
}
