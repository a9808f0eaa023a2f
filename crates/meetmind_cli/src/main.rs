//! Command-line entry point for MeetMind history.
//!
//! # Responsibility
//! - Wire config, logging, SQLite storage, record store and toasts together.
//! - Offer a few history commands plus a linkage probe (`ping`).
//!
//! Usage: `meetmind_cli [ping | list [query] | tag <tag> | export <id> | clear]`

use log::error;
use meetmind_core::db::open_db;
use meetmind_core::{
    init_logging_from_config, CoreConfig, HistoryService, MeetingId, MeetingStore, SearchState,
    SqliteStorage, ToastProvider,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.first().map(String::as_str) == Some("ping") {
        println!("meetmind_core ping={}", meetmind_core::ping());
        println!("meetmind_core version={}", meetmind_core::core_version());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    init_logging_from_config(&config).map_err(|err| err.to_string())?;

    if let Some(parent) = config.db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|err| format!("cannot create `{}`: {err}", parent.display()))?;
    }
    let conn = open_db(&config.db_path).map_err(|err| err.to_string())?;
    let store = MeetingStore::with_key(SqliteStorage::new(conn), config.storage_key.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|err| format!("failed to start runtime: {err}"))?;
    let _guard = runtime.enter();
    let provider = ToastProvider::with_ttl(config.toast_ttl).map_err(|err| err.to_string())?;

    let command = args.first().map(String::as_str).unwrap_or("list");
    let search = match command {
        "list" => SearchState::from_query_param(args.get(1).map(String::as_str)),
        _ => SearchState::new(),
    };
    let mut service = HistoryService::new(store, provider.notifier(), search);

    match command {
        "list" => print_meetings(&service),
        "tag" => {
            let tag = args.get(1).ok_or("usage: tag <tag>")?;
            service.search_mut().focus_tag(tag);
            print_meetings(&service);
        }
        "export" => {
            let id = args.get(1).ok_or("usage: export <meeting-id>")?;
            let csv = service
                .export_actions_csv(&MeetingId::new(id.as_str()))
                .map_err(|err| err.to_string())?;
            println!("{csv}");
        }
        "clear" => service.clear_history(),
        other => return Err(format!("unknown command `{other}`")),
    }

    for toast in provider.visible() {
        println!("[{}] {}", toast.kind.as_str(), toast.message);
    }
    Ok(())
}

fn print_meetings<S: meetmind_core::EntryStorage>(service: &HistoryService<S>) {
    let visible = service.visible();
    if visible.is_empty() {
        println!("No meetings match your search or filters.");
        return;
    }
    for meeting in visible {
        println!(
            "{}  {}  {}  owner={} actions={} tags={}",
            meeting.id,
            meeting.date,
            meeting.title,
            meeting.owner,
            meeting.actions.len(),
            meeting.tags.join(",")
        );
    }
}
