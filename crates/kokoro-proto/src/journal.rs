//! Journal entries kept in [`LocalStorage`] under a single key.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::JournalError;
use crate::storage::LocalStorage;

/// Storage key holding the JSON array of entries.
pub const JOURNAL_KEY: &str = "journalEntries";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: String,
    pub text: String,
}

/// Locale-style label, e.g. `3/14/2025, 9:05:07 PM`.
pub fn format_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub struct JournalStore {
    storage: LocalStorage,
}

impl JournalStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Append an entry stamped with the current local time.
    pub fn append(&self, text: &str) -> Result<JournalEntry, JournalError> {
        self.append_at(text, Local::now())
    }

    pub fn append_at(&self, text: &str, now: DateTime<Local>) -> Result<JournalEntry, JournalError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::Empty);
        }

        let entry = JournalEntry {
            timestamp: format_timestamp(now),
            text: text.to_string(),
        };

        // Whole-sequence read-modify-write; see LocalStorage for the race.
        // A read error aborts so stored entries are never replaced.
        let mut entries = parse_entries(self.storage.get_item(JOURNAL_KEY)?);
        entries.push(entry.clone());
        self.write(&entries)?;
        info!("journal: appended entry ({} total)", entries.len());
        Ok(entry)
    }

    /// All stored entries in insertion order. Absent or unreadable data reads
    /// as an empty journal.
    pub fn load_all(&self) -> Vec<JournalEntry> {
        match self.storage.get_item(JOURNAL_KEY) {
            Ok(raw) => parse_entries(raw),
            Err(e) => {
                warn!("journal: {}", e);
                Vec::new()
            }
        }
    }

    pub fn clear_all(&self) -> Result<(), JournalError> {
        self.storage.remove_item(JOURNAL_KEY)?;
        info!("journal: cleared");
        Ok(())
    }

    fn write(&self, entries: &[JournalEntry]) -> Result<(), JournalError> {
        let payload = serde_json::to_string(entries).map_err(|source| {
            crate::error::StorageError::Encode {
                key: JOURNAL_KEY.to_string(),
                source,
            }
        })?;
        self.storage.set_item(JOURNAL_KEY, &payload)?;
        Ok(())
    }
}

/// Malformed content reads as empty and is replaced on the next append.
fn parse_entries(raw: Option<String>) -> Vec<JournalEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("journal: ignoring malformed {}: {}", JOURNAL_KEY, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> JournalStore {
        JournalStore::new(LocalStorage::new(dir.path()))
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let dir = TempDir::new().unwrap();
        let journal = store(&dir);
        assert!(matches!(journal.append("   \n\t"), Err(JournalError::Empty)));
        assert!(journal.load_all().is_empty());
        assert!(!dir.path().join("journalEntries.json").exists());
    }

    #[test]
    fn test_entries_survive_reload_in_order() {
        let dir = TempDir::new().unwrap();
        let texts = ["woke up tired", "  long walk helped  ", "called mum"];
        {
            let journal = store(&dir);
            for t in texts {
                journal.append(t).unwrap();
            }
        }

        let reloaded = store(&dir).load_all();
        let got: Vec<&str> = reloaded.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(got, vec!["woke up tired", "long walk helped", "called mum"]);
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let dir = TempDir::new().unwrap();
        let journal = store(&dir);
        journal.append("one").unwrap();
        journal.append("two").unwrap();
        journal.clear_all().unwrap();
        assert!(store(&dir).load_all().is_empty());

        // The journal keeps working after a clear.
        journal.append("three").unwrap();
        assert_eq!(store(&dir).load_all().len(), 1);
    }

    #[test]
    fn test_malformed_content_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage.set_item(JOURNAL_KEY, "{not json").unwrap();
        let journal = JournalStore::new(storage);
        assert!(journal.load_all().is_empty());

        // Next append overwrites the garbage rather than failing.
        journal.append("fresh start").unwrap();
        assert_eq!(journal.load_all().len(), 1);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Local.with_ymd_and_hms(2025, 3, 14, 21, 5, 7).unwrap();
        assert_eq!(format_timestamp(ts), "3/14/2025, 9:05:07 PM");

        let dir = TempDir::new().unwrap();
        let entry = store(&dir).append_at("tea", ts).unwrap();
        assert_eq!(entry.timestamp, "3/14/2025, 9:05:07 PM");
    }

    #[test]
    fn test_wire_format_matches_stored_shape() {
        let dir = TempDir::new().unwrap();
        let journal = store(&dir);
        let ts = Local.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();
        journal.append_at("hello", ts).unwrap();

        let raw = LocalStorage::new(dir.path())
            .get_item(JOURNAL_KEY)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"timestamp": "1/2/2024, 8:00:00 AM", "text": "hello"}])
        );
    }

    #[test]
    fn test_unreadable_journal_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        // A directory where the value file belongs fails the read with
        // something other than NotFound.
        let blocked = dir.path().join(format!("{}.json", JOURNAL_KEY));
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("keep"), "old entries").unwrap();

        let journal = store(&dir);
        assert!(matches!(
            journal.append("new entry"),
            Err(JournalError::Storage(StorageError::Io { .. }))
        ));
        assert!(blocked.is_dir());
        assert_eq!(
            std::fs::read_to_string(blocked.join("keep")).unwrap(),
            "old entries"
        );
        assert!(journal.load_all().is_empty());
    }
}
