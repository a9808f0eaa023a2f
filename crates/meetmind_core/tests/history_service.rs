use meetmind_core::service::history_service::{
    CLEARED_MESSAGE, SAVED_MESSAGE, SAVE_FAILED_MESSAGE,
};
use meetmind_core::{
    ActionItem, HistoryService, HistoryServiceError, MeetingId, MeetingStore, MemoryStorage,
    NewMeeting, SearchState, ToastKind, ToastProvider, DEFAULT_STORAGE_KEY, EntryStorage,
};

fn standup() -> NewMeeting {
    NewMeeting {
        title: "Daily standup".to_string(),
        date: "2026-03-03".to_string(),
        owner: "Sam".to_string(),
        actions: vec![ActionItem::new(r#"Rename "beta" flag"#)],
        tags: vec!["Engineering".to_string()],
        key_points: vec!["Build is green".to_string()],
        summary: "Quick status round".to_string(),
        transcript_sample: "Morning all...".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn recording_a_meeting_refreshes_and_notifies_success() {
    let provider = ToastProvider::new().unwrap();
    let storage = MemoryStorage::new();
    let mut service = HistoryService::new(
        MeetingStore::new(&storage),
        provider.notifier(),
        SearchState::new(),
    );
    assert_eq!(service.meetings().len(), 2);

    let saved = service.record_meeting(standup()).unwrap();
    assert_eq!(service.meetings().len(), 3);
    assert_eq!(service.meetings()[0].id, saved.id);

    let toasts = provider.visible();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, SAVED_MESSAGE);
    assert_eq!(toasts[0].kind, ToastKind::Success);
}

#[tokio::test(start_paused = true)]
async fn failed_save_posts_error_toast() {
    let provider = ToastProvider::new().unwrap();
    let storage = MemoryStorage::new();
    storage.set_reject_writes(true);
    let mut service = HistoryService::new(
        MeetingStore::new(&storage),
        provider.notifier(),
        SearchState::new(),
    );

    assert!(service.record_meeting(standup()).is_none());
    assert_eq!(service.meetings().len(), 2);
    let toasts = provider.visible();
    assert_eq!(toasts[0].message, SAVE_FAILED_MESSAGE);
    assert_eq!(toasts[0].kind, ToastKind::Error);
}

#[tokio::test(start_paused = true)]
async fn clearing_history_falls_back_to_seed_and_notifies_info() {
    let provider = ToastProvider::new().unwrap();
    let storage = MemoryStorage::new();
    let mut service = HistoryService::new(
        MeetingStore::new(&storage),
        provider.notifier(),
        SearchState::new(),
    );
    service.record_meeting(standup()).unwrap();

    service.clear_history();
    assert_eq!(storage.read_entry(DEFAULT_STORAGE_KEY).unwrap(), None);
    assert_eq!(service.meetings().len(), 2);
    let last = provider.visible().pop().unwrap();
    assert_eq!(last.message, CLEARED_MESSAGE);
    assert_eq!(last.kind, ToastKind::Info);
}

#[tokio::test(start_paused = true)]
async fn visible_follows_search_state() {
    let provider = ToastProvider::new().unwrap();
    let mut service = HistoryService::new(
        MeetingStore::new(MemoryStorage::new()),
        provider.notifier(),
        SearchState::from_query_param(Some("standup")),
    );
    assert!(service.visible().is_empty());

    service.record_meeting(standup()).unwrap();
    assert_eq!(service.visible().len(), 1);

    service.search_mut().set_query("");
    service.search_mut().focus_tag("Enterprise");
    let visible = service.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, MeetingId::new("seed-2"));
    assert!(service.search().show_filters());
}

#[tokio::test(start_paused = true)]
async fn export_renders_csv_for_known_meeting_only() {
    let provider = ToastProvider::new().unwrap();
    let mut service = HistoryService::new(
        MeetingStore::new(MemoryStorage::new()),
        provider.notifier(),
        SearchState::new(),
    );
    let saved = service.record_meeting(standup()).unwrap();

    let csv = service.export_actions_csv(&saved.id).unwrap();
    assert_eq!(
        csv,
        "Task,Owner,Deadline,Priority\n\"Rename \"\"beta\"\" flag\",\"Unassigned\",\"Not Mentioned\",\"Medium\""
    );

    let missing = MeetingId::new("nope");
    assert_eq!(
        service.export_actions_csv(&missing),
        Err(HistoryServiceError::MeetingNotFound(missing.clone()))
    );
}
