use std::io::Write;

use anyhow::Result;
use festival_core::FestivalStore;

use super::recoverable;
use crate::render::render_listing;

pub fn run(store: &FestivalStore, out: &mut impl Write) -> Result<()> {
    if let Some(festivals) = recoverable(store.list_sorted(), out)? {
        writeln!(out, "{}\n", render_listing(&festivals))?;
    }
    Ok(())
}
