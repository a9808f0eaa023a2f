//! Meeting record model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the record store.
//! - Keep the JSON layout (`keyPoints`, `transcriptSample`) stable.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `actions`, `tags` and `key_points` may be empty but are always present;
//!   a payload missing any of them fails to deserialize.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier of one meeting record.
///
/// Seed records use readable ids (`seed-1`), new records use UUID v4 text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(String);

impl MeetingId {
    /// Wraps an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for MeetingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Priority of one extracted action item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Stable text used in persisted payloads and CSV export.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner used when a summarizer could not attribute a task.
pub const UNASSIGNED_OWNER: &str = "Unassigned";
/// Deadline used when a summarizer found no deadline.
pub const UNSPECIFIED_DEADLINE: &str = "Not Mentioned";

/// One task extracted from a meeting. Owned by its parent [`Meeting`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    /// Free-form text (`Feb 20`, `ASAP`, `Tomorrow 6 PM`).
    pub deadline: String,
    pub priority: Priority,
}

impl ActionItem {
    /// Creates an action item with unassigned owner, no deadline and medium
    /// priority.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            owner: UNASSIGNED_OWNER.to_string(),
            deadline: UNSPECIFIED_DEADLINE.to_string(),
            priority: Priority::default(),
        }
    }
}

/// Meeting payload before the store assigns an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub title: String,
    /// Not normalized: either human-readable (`Feb 18, 2026`) or ISO-like.
    pub date: String,
    pub owner: String,
    pub actions: Vec<ActionItem>,
    /// Display order is preserved; matching ignores order.
    pub tags: Vec<String>,
    pub key_points: Vec<String>,
    pub summary: String,
    /// Short transcript preview.
    pub transcript_sample: String,
}

impl NewMeeting {
    /// Attaches an identifier, producing a persisted record.
    pub fn with_id(self, id: MeetingId) -> Meeting {
        Meeting {
            id,
            title: self.title,
            date: self.date,
            owner: self.owner,
            actions: self.actions,
            tags: self.tags,
            key_points: self.key_points,
            summary: self.summary,
            transcript_sample: self.transcript_sample,
        }
    }
}

/// Canonical persisted record of one past meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    /// Display key only; titles are not unique.
    pub title: String,
    pub date: String,
    pub owner: String,
    pub actions: Vec<ActionItem>,
    pub tags: Vec<String>,
    pub key_points: Vec<String>,
    pub summary: String,
    pub transcript_sample: String,
}

impl Meeting {
    /// Returns whether this meeting carries `tag` (exact, case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionItem, Meeting, MeetingId, NewMeeting, Priority};

    #[test]
    fn meeting_serializes_with_camel_case_layout() {
        let meeting = NewMeeting {
            title: "Weekly sync".to_string(),
            key_points: vec!["one".to_string()],
            transcript_sample: "hello".to_string(),
            ..NewMeeting::default()
        }
        .with_id(MeetingId::new("m-1"));

        let value = serde_json::to_value(&meeting).unwrap();
        assert_eq!(value["id"], "m-1");
        assert_eq!(value["keyPoints"][0], "one");
        assert_eq!(value["transcriptSample"], "hello");
        assert!(value.get("key_points").is_none());
    }

    #[test]
    fn priority_uses_capitalized_names() {
        let item = ActionItem {
            priority: Priority::High,
            ..ActionItem::new("ship")
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["priority"], "High");

        let bad = serde_json::json!({
            "task": "x", "owner": "y", "deadline": "z", "priority": "Urgent"
        });
        assert!(serde_json::from_value::<ActionItem>(bad).is_err());
    }

    #[test]
    fn missing_collection_fields_are_rejected() {
        let payload = serde_json::json!({
            "id": "m-1",
            "title": "t",
            "date": "2026-02-18",
            "owner": "o",
            "actions": [],
            "keyPoints": [],
            "summary": "",
            "transcriptSample": ""
        });
        assert!(serde_json::from_value::<Meeting>(payload).is_err());
    }

    #[test]
    fn action_item_defaults_match_summarizer_contract() {
        let item = ActionItem::new("Follow up");
        assert_eq!(item.owner, "Unassigned");
        assert_eq!(item.deadline, "Not Mentioned");
        assert_eq!(item.priority, Priority::Medium);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(MeetingId::generate(), MeetingId::generate());
    }
}
