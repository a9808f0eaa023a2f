//! Query evaluation over the meeting collection.
//!
//! # Responsibility
//! - Decide whether one meeting matches a [`MeetingQuery`].
//! - Produce the matching subset in input order.
//!
//! # Invariants
//! - Categories combine with AND; values inside one category combine with OR.
//! - An empty category never filters anything out.
//! - Date bounds are inclusive on both sides.
//! - With at least one bound set, a meeting whose date cannot be parsed does
//!   not match.

use crate::model::meeting::Meeting;
use crate::search::date::parse_calendar_date;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Query descriptor for history filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MeetingQuery {
    /// Case-insensitive substring; empty matches everything.
    pub text: String,
    /// Exact tag labels; a meeting needs at least one of them.
    pub active_tags: BTreeSet<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl MeetingQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.active_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Returns whether this query filters nothing out.
    pub fn is_unconstrained(&self) -> bool {
        self.text.is_empty()
            && self.active_tags.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// Returns the meetings matching `query`, in input order.
pub fn filter_meetings(meetings: &[Meeting], query: &MeetingQuery) -> Vec<Meeting> {
    if query.is_unconstrained() {
        return meetings.to_vec();
    }

    let needle = query.text.to_lowercase();
    meetings
        .iter()
        .filter(|meeting| {
            matches_text(meeting, &needle)
                && matches_tags(meeting, &query.active_tags)
                && matches_date(meeting, query.date_from, query.date_to)
        })
        .cloned()
        .collect()
}

/// Evaluates the full predicate for one meeting.
pub fn matches_query(meeting: &Meeting, query: &MeetingQuery) -> bool {
    matches_text(meeting, &query.text.to_lowercase())
        && matches_tags(meeting, &query.active_tags)
        && matches_date(meeting, query.date_from, query.date_to)
}

/// `needle` must already be lowercased.
fn matches_text(meeting: &Meeting, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |value: &str| value.to_lowercase().contains(needle);

    contains(&meeting.title)
        || contains(&meeting.owner)
        || meeting.tags.iter().any(|tag| contains(tag))
        || contains(&meeting.summary)
        || meeting.key_points.iter().any(|point| contains(point))
}

fn matches_tags(meeting: &Meeting, active_tags: &BTreeSet<String>) -> bool {
    active_tags.is_empty() || active_tags.iter().any(|tag| meeting.has_tag(tag))
}

fn matches_date(meeting: &Meeting, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }

    let Ok(date) = parse_calendar_date(&meeting.date) else {
        return false;
    };
    from.map_or(true, |bound| date >= bound) && to.map_or(true, |bound| date <= bound)
}

#[cfg(test)]
mod tests {
    use super::{matches_date, matches_text};
    use crate::model::meeting::{MeetingId, NewMeeting};
    use chrono::NaiveDate;

    fn dated(date: &str) -> crate::model::meeting::Meeting {
        NewMeeting {
            date: date.to_string(),
            ..NewMeeting::default()
        }
        .with_id(MeetingId::new("m"))
    }

    #[test]
    fn text_match_ignores_transcript_sample() {
        let meeting = NewMeeting {
            transcript_sample: "secret roadmap".to_string(),
            ..NewMeeting::default()
        }
        .with_id(MeetingId::new("m"));
        assert!(!matches_text(&meeting, "roadmap"));
        assert!(matches_text(&meeting, ""));
    }

    #[test]
    fn unparsable_date_only_matters_when_a_bound_is_set() {
        let meeting = dated("sometime last week");
        let bound = NaiveDate::from_ymd_opt(2026, 1, 1);
        assert!(matches_date(&meeting, None, None));
        assert!(!matches_date(&meeting, bound, None));
        assert!(!matches_date(&meeting, None, bound));
    }

    #[test]
    fn open_ended_bounds_are_unconstrained_on_missing_side() {
        let meeting = dated("Feb 16, 2026");
        let before = NaiveDate::from_ymd_opt(2026, 2, 1);
        let after = NaiveDate::from_ymd_opt(2026, 3, 1);
        assert!(matches_date(&meeting, before, None));
        assert!(matches_date(&meeting, None, after));
        assert!(!matches_date(&meeting, after, None));
        assert!(!matches_date(&meeting, None, before));
    }
}
