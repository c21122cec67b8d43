pub mod add;
pub mod delete;
pub mod remind;
pub mod view;

use std::io::Write;

use anyhow::Result;
use festival_core::FestivalResult;

use crate::render::render_error;

/// Whether the shell keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Print recoverable store errors and carry on; hand fatal ones back up.
fn recoverable<T, W: Write + ?Sized>(result: FestivalResult<T>, out: &mut W) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if !e.is_fatal() => {
            writeln!(out, "{}\n", render_error(&e))?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festival_core::FestivalError;

    #[test]
    fn user_errors_are_printed_and_swallowed() {
        let mut out = Vec::new();
        let result: FestivalResult<()> = Err(FestivalError::NotFound("Eid".into()));

        assert!(matches!(recoverable(result, &mut out), Ok(None)));
        assert!(String::from_utf8(out).unwrap().contains("Festival not found!"));
    }

    #[test]
    fn success_passes_through() {
        let mut out = Vec::new();
        assert!(matches!(recoverable(Ok(3), &mut out), Ok(Some(3))));
        assert!(out.is_empty());
    }

    #[test]
    fn fatal_errors_propagate() {
        let mut out = Vec::new();
        let result: FestivalResult<()> = Err(FestivalError::Config("unreadable".into()));
        let err = recoverable(result, &mut out).unwrap_err();
        assert!(err.to_string().contains("unreadable"));
    }
}
