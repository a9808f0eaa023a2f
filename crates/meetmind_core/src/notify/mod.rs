//! Transient user-facing notifications.
//!
//! # Responsibility
//! - Own the visible toast list and each toast's scheduled removal.
//! - Hand out an explicit [`toast_center::Notifier`] capability instead of a
//!   global accessor.
//!
//! # Invariants
//! - Toasts are appended in creation order and removed only by their timer.
//! - Using a notifier after its provider is gone is a contract violation.

pub mod toast_center;
