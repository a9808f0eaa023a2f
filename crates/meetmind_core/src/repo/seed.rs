//! First-run demonstration records.
//!
//! Returned by the record store only while no persisted entry exists.

use crate::model::meeting::{ActionItem, Meeting, MeetingId, Priority};

fn action(task: &str, owner: &str, deadline: &str, priority: Priority) -> ActionItem {
    ActionItem {
        task: task.to_string(),
        owner: owner.to_string(),
        deadline: deadline.to_string(),
        priority,
    }
}

fn texts(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Returns the fixed two-record seed fixture, newest first.
pub fn seed_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: MeetingId::new("seed-1"),
            title: "Launch planning — Sprint 12".to_string(),
            date: "Feb 18, 2026".to_string(),
            owner: "Anna".to_string(),
            actions: vec![
                action("Finalize launch date", "Anna", "Feb 20", Priority::High),
                action("Prepare GTM deck", "Marketing", "Feb 29", Priority::High),
            ],
            tags: texts(&["Launch", "Marketing"]),
            key_points: texts(&[
                "Confirmed Mar 14 as hard launch date – no slippage allowed.",
                "Marketing to deliver GTM deck by Feb 29.",
                "Engineering freeze date set to Mar 7.",
                "Risk flagged: analytics instrumentation still incomplete.",
            ]),
            summary: "Team confirmed March 14 launch date. Marketing GTM deck due Feb 29. \
                      Engineering code freeze on March 7."
                .to_string(),
            transcript_sample: "Team sync focused on the March launch...".to_string(),
        },
        Meeting {
            id: MeetingId::new("seed-2"),
            title: "Customer advisory board".to_string(),
            date: "Feb 16, 2026".to_string(),
            owner: "Victor".to_string(),
            actions: vec![action(
                "Follow up on renewal",
                "Victor",
                "ASAP",
                Priority::Medium,
            )],
            tags: texts(&["Enterprise", "Feedback"]),
            key_points: texts(&[
                "Enterprise customers want SSO + audit logs by Q2.",
                "Positive signal on AI summarisation – 4/5 rated it 9+.",
                "Victor to follow up with Acme on renewal terms.",
            ]),
            summary: "Enterprise customers requested SSO and audit logs. \
                      AI summarization received high ratings."
                .to_string(),
            transcript_sample: "Feedback session with enterprise customers...".to_string(),
        },
    ]
}
