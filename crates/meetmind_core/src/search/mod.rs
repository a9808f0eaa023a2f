//! Meeting history search.
//!
//! # Responsibility
//! - Evaluate multi-criteria queries (text, tags, date range) over meetings.
//! - Hold the co-located search UI state (selection, panels, expanded notes).
//!
//! # Invariants
//! - Filtering is a pure function of `(meetings, query)` and preserves order.

pub mod date;
pub mod filter;
pub mod state;
