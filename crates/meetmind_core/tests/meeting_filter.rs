use chrono::NaiveDate;
use meetmind_core::{
    filter_meetings, matches_query, seed_meetings, Meeting, MeetingId, MeetingQuery, NewMeeting,
    SearchState,
};

fn meeting(id: &str, title: &str, date: &str, tags: &[&str]) -> Meeting {
    NewMeeting {
        title: title.to_string(),
        date: date.to_string(),
        owner: "Owner".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        ..NewMeeting::default()
    }
    .with_id(MeetingId::new(id))
}

fn ids(meetings: &[Meeting]) -> Vec<&str> {
    meetings.iter().map(|meeting| meeting.id.as_str()).collect()
}

fn day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[test]
fn empty_query_returns_input_unchanged_in_order() {
    let meetings = vec![
        meeting("c", "Third", "not a date", &[]),
        meeting("a", "First", "2026-01-01", &["Sales"]),
        meeting("b", "Second", "Feb 2, 2026", &[]),
    ];
    let filtered = filter_meetings(&meetings, &MeetingQuery::default());
    assert_eq!(filtered, meetings);
}

#[test]
fn text_query_is_case_insensitive_across_fields() {
    let seeds = seed_meetings();

    let by_title = filter_meetings(&seeds, &MeetingQuery::new("LAUNCH planning"));
    assert_eq!(ids(&by_title), ["seed-1"]);

    let by_owner = filter_meetings(&seeds, &MeetingQuery::new("victor"));
    assert_eq!(ids(&by_owner), ["seed-2"]);

    let by_tag = filter_meetings(&seeds, &MeetingQuery::new("feedb"));
    assert_eq!(ids(&by_tag), ["seed-2"]);

    let by_summary = filter_meetings(&seeds, &MeetingQuery::new("code freeze"));
    assert_eq!(ids(&by_summary), ["seed-1"]);

    let by_key_point = filter_meetings(&seeds, &MeetingQuery::new("acme"));
    assert_eq!(ids(&by_key_point), ["seed-2"]);

    let nothing = filter_meetings(&seeds, &MeetingQuery::new("quarterly budget"));
    assert!(nothing.is_empty());
}

#[test]
fn tag_selection_uses_or_semantics() {
    let meetings = vec![
        meeting("a", "A", "2026-02-01", &["Launch"]),
        meeting("b", "B", "2026-02-01", &["Enterprise"]),
        meeting("c", "C", "2026-02-01", &["Launch", "Enterprise"]),
        meeting("d", "D", "2026-02-01", &["Sales"]),
    ];
    let query = MeetingQuery::default().with_tags(["Launch", "Enterprise"]);
    assert_eq!(ids(&filter_meetings(&meetings, &query)), ["a", "b", "c"]);
}

#[test]
fn tag_match_is_exact_label_match() {
    let meetings = vec![meeting("a", "A", "2026-02-01", &["Launch"])];
    let query = MeetingQuery::default().with_tags(["launch"]);
    assert!(filter_meetings(&meetings, &query).is_empty());
}

#[test]
fn date_bounds_are_inclusive_on_both_ends() {
    let meetings = vec![
        meeting("before", "x", "2026-02-09", &[]),
        meeting("from", "x", "Feb 10, 2026", &[]),
        meeting("inside", "x", "2026-02-12", &[]),
        meeting("to", "x", "2026-02-14", &[]),
        meeting("after", "x", "February 15, 2026", &[]),
    ];
    let query = MeetingQuery::default().with_date_range(day(2026, 2, 10), day(2026, 2, 14));
    assert_eq!(
        ids(&filter_meetings(&meetings, &query)),
        ["from", "inside", "to"]
    );
}

#[test]
fn unparsable_meeting_dates_are_excluded_only_when_bounded() {
    let meetings = vec![
        meeting("odd", "x", "sometime in spring", &[]),
        meeting("ok", "x", "2026-03-01", &[]),
    ];
    let unbounded = MeetingQuery::default();
    assert_eq!(ids(&filter_meetings(&meetings, &unbounded)), ["odd", "ok"]);

    let bounded = MeetingQuery::default().with_date_range(day(2026, 1, 1), None);
    assert_eq!(ids(&filter_meetings(&meetings, &bounded)), ["ok"]);
}

#[test]
fn inverted_range_matches_nothing() {
    let meetings = seed_meetings();
    let query = MeetingQuery::default().with_date_range(day(2026, 3, 1), day(2026, 1, 1));
    assert!(filter_meetings(&meetings, &query).is_empty());
}

#[test]
fn categories_combine_with_and() {
    let seeds = seed_meetings();
    let query = MeetingQuery::new("launch")
        .with_tags(["Enterprise"])
        .with_date_range(day(2026, 2, 1), day(2026, 2, 28));
    assert!(filter_meetings(&seeds, &query).is_empty());
    assert!(!matches_query(&seeds[0], &query));

    let query = MeetingQuery::new("launch")
        .with_tags(["Marketing", "Enterprise"])
        .with_date_range(day(2026, 2, 18), None);
    assert_eq!(ids(&filter_meetings(&seeds, &query)), ["seed-1"]);
}

#[test]
fn filtering_is_repeatable_for_equal_inputs() {
    let seeds = seed_meetings();
    let query = MeetingQuery::new("e").with_tags(["Feedback"]);
    assert_eq!(query.clone(), query);
    assert_eq!(
        filter_meetings(&seeds, &query),
        filter_meetings(&seeds, &query.clone())
    );
}

#[test]
fn search_state_drives_filter_and_keeps_expansion_per_id() {
    let meetings = vec![
        meeting("one", "Weekly sync", "2026-02-01", &["Product"]),
        meeting("two", "Weekly sync", "2026-02-08", &["Sales"]),
    ];
    let mut state = SearchState::from_query_param(Some("weekly"));
    assert_eq!(ids(&state.apply(&meetings)), ["one", "two"]);

    state.toggle_tag("Sales");
    assert_eq!(ids(&state.apply(&meetings)), ["two"]);

    state.clear_tags();
    state.set_date_to("2026-02-01").unwrap();
    assert_eq!(ids(&state.apply(&meetings)), ["one"]);

    state.toggle_notes(&meetings[0].id);
    assert!(state.is_expanded(&meetings[0].id));
    assert!(!state.is_expanded(&meetings[1].id));
}
