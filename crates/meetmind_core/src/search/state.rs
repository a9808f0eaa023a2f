//! Search UI state co-located with the filter.
//!
//! Keeps the pieces the history view toggles (tag selection, date inputs,
//! panel visibility, expanded notes) and turns them into a [`MeetingQuery`].
//! Expanded notes are keyed by [`MeetingId`], so meetings sharing a title
//! expand independently.

use crate::model::meeting::{Meeting, MeetingId};
use crate::search::date::{parse_calendar_date, DateParseError};
use crate::search::filter::{filter_meetings, MeetingQuery};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Tags offered by the filter panel.
pub const TAG_CATALOG: &[&str] = &[
    "Launch",
    "Marketing",
    "Enterprise",
    "Feedback",
    "Product",
    "Engineering",
    "Sales",
    "Training",
    "AI Generated",
];

/// Mutable search state of one history view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    /// Selection order is kept for display.
    active_tags: Vec<String>,
    show_filters: bool,
    show_date_range: bool,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    expanded: HashSet<MeetingId>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the text query from an optional `q` location parameter.
    pub fn from_query_param(q: Option<&str>) -> Self {
        Self {
            query: q.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn active_tags(&self) -> &[String] {
        &self.active_tags
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|value| value == tag)
    }

    /// Adds `tag` to the selection, or removes it when already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.is_tag_active(tag) {
            self.active_tags.retain(|value| value != tag);
        } else {
            self.active_tags.push(tag.to_string());
        }
    }

    pub fn clear_tags(&mut self) {
        self.active_tags.clear();
    }

    /// Selects exactly `tag` and opens the filter panel.
    pub fn focus_tag(&mut self, tag: &str) {
        self.active_tags = vec![tag.to_string()];
        self.show_filters = true;
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    pub fn toggle_filters_panel(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn show_date_range(&self) -> bool {
        self.show_date_range
    }

    pub fn toggle_date_range_panel(&mut self) {
        self.show_date_range = !self.show_date_range;
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    /// Sets the lower bound from date-input text; blank text clears it.
    ///
    /// On error the previous bound is kept.
    pub fn set_date_from(&mut self, text: &str) -> Result<(), DateParseError> {
        self.date_from = parse_bound(text)?;
        Ok(())
    }

    /// Sets the upper bound from date-input text; blank text clears it.
    pub fn set_date_to(&mut self, text: &str) -> Result<(), DateParseError> {
        self.date_to = parse_bound(text)?;
        Ok(())
    }

    pub fn clear_dates(&mut self) {
        self.date_from = None;
        self.date_to = None;
    }

    /// Flips the notes panel of one meeting.
    pub fn toggle_notes(&mut self, id: &MeetingId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &MeetingId) -> bool {
        self.expanded.contains(id)
    }

    /// Builds the query descriptor for the filter.
    pub fn to_query(&self) -> MeetingQuery {
        MeetingQuery::new(self.query.clone())
            .with_tags(self.active_tags.iter().cloned())
            .with_date_range(self.date_from, self.date_to)
    }

    /// Filters `meetings` with the current state.
    pub fn apply(&self, meetings: &[Meeting]) -> Vec<Meeting> {
        filter_meetings(meetings, &self.to_query())
    }
}

fn parse_bound(text: &str) -> Result<Option<NaiveDate>, DateParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_calendar_date(text).map(Some)
}
