//! Deadline Agenda - Group messages with due dates into a paginated agenda
//!
//! This library turns a flat collection of messages into a date-bucketed,
//! reverse-chronological agenda of deadline sections. It supports:
//!
//! - Bucketing messages by due-date day into descending-keyed sections
//! - Incremental backward pagination, one batch of past months at a time,
//!   with placeholder sections for months without deadlines
//! - Tracking the oldest and next-upcoming deadline to decide whether more
//!   history can be loaded
//! - Parsing message records from a `messages.jsonl` file
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chrono::Utc;
//! use deadline_agenda::{AgendaState, parse_messages_file};
//!
//! let messages = parse_messages_file(Path::new("messages.jsonl"))?;
//! let mut agenda = AgendaState::build(&messages, Utc::now());
//! agenda.load_more(Utc::now());
//! println!("Rendered {} sections", agenda.rendered().len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod agenda;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use agenda::{AgendaState, SelectionState, build_sections};
pub use models::{DeadlineItem, Message, Section, Sections};
pub use parsers::parse_messages_file;
