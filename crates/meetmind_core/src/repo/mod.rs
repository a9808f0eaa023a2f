//! Persistence port and the meeting record store built on it.
//!
//! # Responsibility
//! - Define the named-entry storage contract and its backends.
//! - Own the meeting collection and its persisted JSON representation.
//!
//! # Invariants
//! - The meeting collection is persisted as one JSON array under one key.
//! - Record store operations recover failures locally and log them.

pub mod entry_store;
pub mod meeting_repo;
pub mod seed;
