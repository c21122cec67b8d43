//! The festival store: a name → date mapping persisted as one JSON file.
//!
//! The whole mapping lives in memory and the backing file is rewritten after
//! every mutation.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{FestivalError, FestivalResult};
use crate::festival::{Festival, normalize_name, parse_date};
use crate::reminder::ReminderReport;

/// Written to a fresh backing file on first run.
const SAMPLE_FESTIVALS: &[(&str, &str)] = &[
    ("Holi", "2025-03-14"),
    ("Ganesh Chaturthi", "2025-09-01"),
    ("Diwali", "2025-10-20"),
    ("Christmas", "2025-12-25"),
];

pub struct FestivalStore {
    path: PathBuf,
    entries: BTreeMap<String, NaiveDate>,
    seeded: bool,
}

impl FestivalStore {
    /// Load the store from `path`, seeding it with the sample festivals if
    /// the file doesn't exist yet.
    pub fn open(path: impl Into<PathBuf>) -> FestivalResult<Self> {
        let path = path.into();

        if !path.exists() {
            let mut entries = BTreeMap::new();
            for (name, date) in SAMPLE_FESTIVALS {
                entries.insert(name.to_string(), parse_date(date)?);
            }

            let store = FestivalStore {
                path,
                entries,
                seeded: true,
            };
            store.save()?;
            info!(path = %store.path.display(), "Seeded festival store with sample festivals");
            return Ok(store);
        }

        let content = std::fs::read_to_string(&path)?;
        let entries: BTreeMap<String, NaiveDate> = serde_json::from_str(&content)
            .map_err(|source| FestivalError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), count = entries.len(), "Loaded festival store");

        Ok(FestivalStore {
            path,
            entries,
            seeded: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if `open` created the backing file during this run.
    pub fn was_seeded(&self) -> bool {
        self.seeded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a festival by name (normalised before lookup).
    pub fn get(&self, name: &str) -> Option<Festival> {
        let name = normalize_name(name);
        self.entries
            .get(&name)
            .map(|date| Festival::new(name.clone(), *date))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    /// All festivals, ordered by name.
    pub fn festivals(&self) -> impl Iterator<Item = Festival> + '_ {
        self.entries
            .iter()
            .map(|(name, date)| Festival::new(name.clone(), *date))
    }

    /// Overwrite the backing file with the full mapping.
    pub fn save(&self) -> FestivalResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        self.entries
            .serialize(&mut serializer)
            .map_err(std::io::Error::from)?;
        content.push(b'\n');

        let temp = temp_path(&self.path);
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), count = self.entries.len(), "Saved festival store");
        Ok(())
    }

    /// Add a festival. Duplicate names are rejected before the date is looked at.
    pub fn add(&mut self, name: &str, date_text: &str) -> FestivalResult<Festival> {
        let name = normalize_name(name);
        if self.entries.contains_key(&name) {
            warn!(%name, "Festival already exists");
            return Err(FestivalError::AlreadyExists(name));
        }

        let date = parse_date(date_text)?;
        self.entries.insert(name.clone(), date);

        if let Err(e) = self.save() {
            self.entries.remove(&name);
            return Err(e);
        }

        info!(%name, %date, "Added festival");
        Ok(Festival::new(name, date))
    }

    /// Remove a festival by name.
    pub fn delete(&mut self, name: &str) -> FestivalResult<Festival> {
        let name = normalize_name(name);
        let Some(date) = self.entries.remove(&name) else {
            return Err(FestivalError::NotFound(name));
        };

        if let Err(e) = self.save() {
            self.entries.insert(name, date);
            return Err(e);
        }

        info!(%name, "Deleted festival");
        Ok(Festival::new(name, date))
    }

    /// Festivals ordered by date, then name.
    pub fn list_sorted(&self) -> FestivalResult<Vec<Festival>> {
        if self.entries.is_empty() {
            return Err(FestivalError::Empty);
        }

        let mut festivals: Vec<Festival> = self.festivals().collect();
        // Stable sort: entries already come out in name order.
        festivals.sort_by_key(|f| f.date);
        Ok(festivals)
    }

    /// Festivals happening on `today` and within the following week.
    pub fn check_reminders(&self, today: NaiveDate) -> ReminderReport {
        let festivals: Vec<Festival> = self.festivals().collect();
        ReminderReport::build(&festivals, today)
    }
}

/// Sibling temp file used for write-then-rename.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
