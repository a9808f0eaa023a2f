//! Meeting record store over the named-entry persistence port.
//!
//! # Responsibility
//! - Load the meeting collection, falling back to the seed fixture when no
//!   entry exists yet.
//! - Prepend new meetings and persist the whole collection in one overwrite.
//! - Render action items as CSV.
//!
//! # Invariants
//! - Missing entry => seed fixture; malformed entry => empty collection.
//! - Saved meetings always land first, with an id unused by the collection.
//! - The contract APIs (`get_meetings`, `save_meeting`, `clear_history`) never
//!   return errors; failures are logged and observable via the `try_*` APIs.

use crate::model::meeting::{ActionItem, Meeting, MeetingId, NewMeeting};
use crate::repo::entry_store::{EntryStorage, StorageError};
use crate::repo::seed::seed_meetings;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default name of the persisted history entry.
pub const DEFAULT_STORAGE_KEY: &str = "meetmind_history";

const CSV_HEADERS: [&str; 4] = ["Task", "Owner", "Deadline", "Priority"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store failure.
#[derive(Debug)]
pub enum StoreError {
    /// Persisted payload exists but is not a valid meeting array.
    Corrupt(serde_json::Error),
    /// Collection could not be serialized.
    Encode(serde_json::Error),
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrupt(err) => write!(f, "persisted meeting history is malformed: {err}"),
            Self::Encode(err) => write!(f, "failed to encode meeting history: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Corrupt(err) | Self::Encode(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::Corrupt(_) => "deserialize_failed",
            Self::Encode(_) => "serialize_failed",
            Self::Storage(StorageError::QuotaExceeded { .. }) => "quota_exceeded",
            Self::Storage(_) => "storage_failed",
        }
    }
}

/// Meeting history store bound to one named entry.
pub struct MeetingStore<S: EntryStorage> {
    storage: S,
    key: String,
}

impl<S: EntryStorage> MeetingStore<S> {
    /// Creates a store using [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Loads the collection, surfacing read and decode failures.
    ///
    /// Returns the seed fixture when the entry does not exist. An existing
    /// entry holding `[]` is a real empty collection.
    pub fn load_meetings(&self) -> StoreResult<Vec<Meeting>> {
        match self.storage.read_entry(&self.key)? {
            None => Ok(seed_meetings()),
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
        }
    }

    /// Returns the collection; any failure is logged and yields an empty
    /// collection (not the seed fixture).
    pub fn get_meetings(&self) -> Vec<Meeting> {
        match self.load_meetings() {
            Ok(meetings) => meetings,
            Err(err) => {
                error!(
                    "event=meetings_load module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Saves one meeting in front of the current collection.
    ///
    /// The base collection is whatever [`Self::get_meetings`] yields, so a
    /// first save keeps the seed records and a save over a malformed entry
    /// replaces it.
    pub fn try_save_meeting(&self, meeting: NewMeeting) -> StoreResult<Meeting> {
        let existing = self.get_meetings();
        let saved = meeting.with_id(fresh_id(&existing));

        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(saved.clone());
        updated.extend(existing);

        let payload = serde_json::to_string(&updated).map_err(StoreError::Encode)?;
        self.storage.write_entry(&self.key, &payload)?;
        info!(
            "event=meeting_save module=store status=ok count={} bytes={}",
            updated.len(),
            payload.len()
        );
        Ok(saved)
    }

    /// Contract variant of [`Self::try_save_meeting`]: failures are logged
    /// and yield `None`.
    pub fn save_meeting(&self, meeting: NewMeeting) -> Option<Meeting> {
        match self.try_save_meeting(meeting) {
            Ok(saved) => Some(saved),
            Err(err) => {
                error!(
                    "event=meeting_save module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                None
            }
        }
    }

    /// Deletes the persisted entry; the next load returns the seed fixture.
    pub fn try_clear_history(&self) -> StoreResult<()> {
        self.storage.delete_entry(&self.key)?;
        info!("event=history_clear module=store status=ok");
        Ok(())
    }

    /// Contract variant of [`Self::try_clear_history`].
    pub fn clear_history(&self) {
        if let Err(err) = self.try_clear_history() {
            error!(
                "event=history_clear module=store status=error error_code={} error={}",
                err.code(),
                err
            );
        }
    }
}

fn fresh_id(existing: &[Meeting]) -> MeetingId {
    loop {
        let candidate = MeetingId::generate();
        if existing.iter().all(|meeting| meeting.id != candidate) {
            return candidate;
        }
        warn!("event=meeting_id_collision module=store status=retry");
    }
}

/// Renders action items as CSV.
///
/// Header `Task,Owner,Deadline,Priority`, one row per item, every field
/// wrapped in `"` with embedded `"` doubled, rows joined by `\n`. Commas and
/// newlines inside fields get no extra treatment beyond the quoting.
pub fn generate_csv(actions: &[ActionItem]) -> String {
    let mut lines = Vec::with_capacity(actions.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for item in actions {
        let row = [
            item.task.as_str(),
            item.owner.as_str(),
            item.deadline.as_str(),
            item.priority.as_str(),
        ]
        .iter()
        .map(|field| quote_csv_field(field))
        .collect::<Vec<_>>()
        .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

fn quote_csv_field(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::{generate_csv, quote_csv_field};
    use crate::model::meeting::{ActionItem, Priority};

    #[test]
    fn quoting_doubles_embedded_quotes() {
        assert_eq!(quote_csv_field(r#"Say "hi""#), r#""Say ""hi""""#);
    }

    #[test]
    fn csv_without_actions_is_header_only() {
        assert_eq!(generate_csv(&[]), "Task,Owner,Deadline,Priority");
    }

    #[test]
    fn csv_quotes_every_field_and_keeps_commas_verbatim() {
        let actions = vec![
            ActionItem {
                task: "Draft plan, v2".to_string(),
                owner: "Anna".to_string(),
                deadline: "Feb 20".to_string(),
                priority: Priority::High,
            },
            ActionItem::new("Ping legal"),
        ];
        let csv = generate_csv(&actions);
        let lines = csv.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], r#""Draft plan, v2","Anna","Feb 20","High""#);
        assert_eq!(
            lines[2],
            r#""Ping legal","Unassigned","Not Mentioned","Medium""#
        );
    }
}
