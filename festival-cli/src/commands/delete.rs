use std::io::Write;

use anyhow::Result;
use festival_core::FestivalStore;
use owo_colors::OwoColorize;

use super::{Flow, recoverable};
use crate::prompt::Prompt;

pub fn run(store: &mut FestivalStore, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<Flow> {
    let Some(name) = prompt.ask("Enter festival name to delete", out)? else {
        return Ok(Flow::Quit);
    };

    if let Some(festival) = recoverable(store.delete(&name), out)? {
        let message = format!("🗑️ {} deleted successfully!", festival.name);
        writeln!(out, "{}\n", message.green())?;
    }
    Ok(Flow::Continue)
}
