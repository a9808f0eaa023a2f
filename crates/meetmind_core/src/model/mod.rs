//! Domain model for meeting history and transient notifications.
//!
//! # Responsibility
//! - Define the persisted meeting record shape and its action items.
//! - Define the in-memory toast shape used by the notification subsystem.
//!
//! # Invariants
//! - Every meeting is identified by a stable `MeetingId`.
//! - Toasts are never persisted.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod meeting;
pub mod toast;
