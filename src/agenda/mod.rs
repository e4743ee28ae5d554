//! Deadline agenda construction and pagination
//!
//! The agenda is derived from the message collection in one direction only:
//!
//! 1. [`sections`] buckets messages with a due date into day sections, sorted
//!    by descending key (furthest future first).
//! 2. [`window`] extracts the sections of an inclusive time window and
//!    synthesizes an empty-month placeholder when a requested month is bare.
//! 3. [`paginator`] reveals past months in fixed batches, tracking a watermark
//!    of the oldest month already materialized.
//! 4. [`boundary`] recomputes the oldest and next-upcoming deadline ids on
//!    every rebuild, which drives the "can load more" decision.
//!
//! [`state::AgendaState`] ties these together as pure transitions over
//! immutable snapshots: a changed message collection rebuilds everything, a
//! pagination result is computed against one snapshot and applied atomically.
//! [`selection`] adds the bookkeeping for bulk actions over agenda items.

pub mod boundary;
pub mod paginator;
pub mod sections;
pub mod selection;
pub mod state;
pub mod window;

pub use boundary::{is_fully_loaded, last_deadline_id, next_deadline_id};
pub use paginator::{PAST_DATA_MONTHS, PageLoad, load_more, materialize_window};
pub use sections::build_sections;
pub use selection::SelectionState;
pub use state::AgendaState;
pub use window::{current_month_elapsed, month_sections, sections_in_window};
