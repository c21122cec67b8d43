//! Festival records and input normalisation.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{FestivalError, FestivalResult};

/// Date format used for input and for the backing file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A named calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Festival {
    pub name: String,
    pub date: NaiveDate,
}

impl Festival {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Festival {
            name: name.into(),
            date,
        }
    }

    /// Whole days from `today` until this festival. Negative once it has passed.
    pub fn days_from(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

impl fmt::Display for Festival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date.format(DATE_FORMAT))
    }
}

/// Trim and title-case a festival name so lookups are case-insensitive.
///
/// The first cased letter of every run of cased letters is upper-cased and
/// the rest of the run lower-cased. Anything without case (digits,
/// punctuation, CJK) ends the run, so `"new year's eve"` becomes
/// `"New Year'S Eve"`.
///
/// Word starts use the full uppercase mapping since std has no titlecase
/// mapping: `"ß"` becomes `"SS"`, not `"Ss"`.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.trim().chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Parse `YYYY-MM-DD` (zero-padded) into a date.
pub fn parse_date(text: &str) -> FestivalResult<NaiveDate> {
    let text = text.trim();
    let invalid = || FestivalError::InvalidDate(text.to_string());

    // chrono accepts unpadded fields, so check the shape first.
    let shape_ok = text.len() == 10
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}
