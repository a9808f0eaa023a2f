//! Meeting history use-cases.
//!
//! # Responsibility
//! - Keep the loaded meeting collection and the search state of one view.
//! - Report outcomes of store mutations through an injected [`Notifier`].
//!
//! # Invariants
//! - `meetings()` reflects the store as of the last refresh or mutation.
//! - Filtering never touches the store.

use crate::model::meeting::{Meeting, MeetingId, NewMeeting};
use crate::model::toast::ToastKind;
use crate::notify::toast_center::Notifier;
use crate::repo::entry_store::EntryStorage;
use crate::repo::meeting_repo::{generate_csv, MeetingStore};
use crate::search::state::SearchState;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const SAVED_MESSAGE: &str = "Meeting saved to history";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save meeting";
pub const CLEARED_MESSAGE: &str = "History cleared";

/// Service error for history use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryServiceError {
    MeetingNotFound(MeetingId),
}

impl Display for HistoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MeetingNotFound(id) => write!(f, "meeting not found: {id}"),
        }
    }
}

impl Error for HistoryServiceError {}

/// History view model over one record store.
pub struct HistoryService<S: EntryStorage> {
    store: MeetingStore<S>,
    notifier: Notifier,
    search: SearchState,
    meetings: Vec<Meeting>,
}

impl<S: EntryStorage> HistoryService<S> {
    /// Creates the service and performs the initial load.
    pub fn new(store: MeetingStore<S>, notifier: Notifier, search: SearchState) -> Self {
        let meetings = store.get_meetings();
        Self {
            store,
            notifier,
            search,
            meetings,
        }
    }

    pub fn store(&self) -> &MeetingStore<S> {
        &self.store
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    /// Reloads the collection from the store.
    pub fn refresh(&mut self) {
        self.meetings = self.store.get_meetings();
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Meetings matching the current search state, in collection order.
    pub fn visible(&self) -> Vec<Meeting> {
        self.search.apply(&self.meetings)
    }

    /// Saves `meeting`, refreshes and posts a success or error toast.
    ///
    /// # Panics
    /// - When the notifier's provider has been dropped.
    pub fn record_meeting(&mut self, meeting: NewMeeting) -> Option<Meeting> {
        let saved = self.store.save_meeting(meeting);
        self.refresh();
        match &saved {
            Some(_) => self.notifier.notify(SAVED_MESSAGE),
            None => self
                .notifier
                .notify_with(SAVE_FAILED_MESSAGE, ToastKind::Error),
        };
        saved
    }

    /// Clears persisted history; the collection falls back to the seed
    /// records.
    pub fn clear_history(&mut self) {
        self.store.clear_history();
        self.refresh();
        self.notifier.notify_with(CLEARED_MESSAGE, ToastKind::Info);
    }

    /// Renders the action items of one loaded meeting as CSV.
    pub fn export_actions_csv(&self, id: &MeetingId) -> Result<String, HistoryServiceError> {
        self.meetings
            .iter()
            .find(|meeting| &meeting.id == id)
            .map(|meeting| generate_csv(&meeting.actions))
            .ok_or_else(|| HistoryServiceError::MeetingNotFound(id.clone()))
    }
}
