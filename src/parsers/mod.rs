//! Ingestion of the message store's JSONL export
//!
//! A messages file comes from outside this crate and can be partially
//! damaged, so the parser is deliberately forgiving at the line level: a
//! record that fails to deserialize is reported on stderr and skipped rather
//! than aborting the load. Two guards keep that tolerance from masking a
//! genuinely broken input: the load fails when bad lines are the majority,
//! and when a long unbroken run of them shows the file is not line-delimited
//! JSON at all.
//!
//! Fallible paths return `anyhow::Result` with context; the agenda
//! transformations downstream of ingestion stay total functions.

pub mod deserializers;
pub mod messages;

pub use messages::parse_messages_file;
