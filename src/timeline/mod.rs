//! Health-event timeline: filtering, ordering and the single payload the
//! timeline view renders.
//!
//! The query half is pure: it reads a slice of events and a query and returns
//! a fresh, newest-first view. Filters are conjunctive (member AND text AND
//! date range) and a blank axis never restricts. Date bounds are parsed
//! leniently so half-typed input never rejects everything.

mod aggregates;
mod query;
mod types;

pub use aggregates::*;
pub use query::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
