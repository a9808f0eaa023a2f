//! Use-case services composing store, search and notifications.
//!
//! # Responsibility
//! - Play the view-layer role: none of the core components call each other,
//!   the service wires them together.

pub mod history_service;
