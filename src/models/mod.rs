//! Data models for the deadline agenda.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`Message`] - Message records from the external messaging store
//! - [`DeadlineItem`] - A message admitted to the agenda, due date required
//! - [`Section`] - A day bucket of deadlines, or an empty-month placeholder
//!
//! [`Message`] uses serde for JSON deserialization with custom deserializers
//! for special fields (due dates, message ids) in the `parsers` module.

pub mod agenda;
pub mod message;

pub use agenda::{DaySection, DeadlineItem, Section, Sections};
pub use message::Message;
