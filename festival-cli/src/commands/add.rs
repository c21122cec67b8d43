use std::io::Write;

use anyhow::Result;
use festival_core::{FestivalError, FestivalStore, normalize_name};
use owo_colors::OwoColorize;

use super::{Flow, recoverable};
use crate::prompt::Prompt;
use crate::render::render_error;

pub fn run(store: &mut FestivalStore, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<Flow> {
    let Some(name) = prompt.ask("Enter festival name", out)? else {
        return Ok(Flow::Quit);
    };
    let name = normalize_name(&name);

    // Catch duplicates before asking for a date.
    if store.contains(&name) {
        writeln!(out, "{}\n", render_error(&FestivalError::AlreadyExists(name)))?;
        return Ok(Flow::Continue);
    }

    let Some(date) = prompt.ask("Enter date (YYYY-MM-DD)", out)? else {
        return Ok(Flow::Quit);
    };

    if let Some(festival) = recoverable(store.add(&name, &date), out)? {
        let message = format!("✅ {} added successfully!", festival.name);
        writeln!(out, "{}\n", message.green())?;
    }
    Ok(Flow::Continue)
}
