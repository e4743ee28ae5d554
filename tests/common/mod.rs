//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for messages.jsonl test files
pub struct MessageFileBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl MessageFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Add a message entry
    pub fn with_message(mut self, message: MessageBuilder) -> Self {
        self.lines.push(message.to_json());
        self
    }

    /// Add a raw line (for malformed-input tests)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the file and return (tempdir, path); the tempdir must be kept
    /// alive for the path to stay valid
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("messages.jsonl");
        let mut file = fs::File::create(&path).expect("Failed to create messages.jsonl");
        file.write_all(self.lines.join("\n").as_bytes()).expect("Failed to write messages.jsonl");
        (self.temp_dir, path)
    }
}

impl Default for MessageFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for individual message entries
pub struct MessageBuilder {
    id: String,
    subject: String,
    due_date: Option<String>,
    is_read: bool,
    is_archived: bool,
}

impl MessageBuilder {
    /// Create a message with default values and the given id
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            subject: format!("Subject {}", id),
            due_date: None,
            is_read: false,
            is_archived: false,
        }
    }

    /// Set the subject
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    /// Set the due date as an RFC3339 string
    pub fn due_date(mut self, due_date: &str) -> Self {
        self.due_date = Some(format!(r#""{}""#, due_date));
        self
    }

    /// Set the due date as epoch milliseconds
    pub fn due_date_ms(mut self, ms: i64) -> Self {
        self.due_date = Some(ms.to_string());
        self
    }

    /// Mark the message as read
    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }

    /// Mark the message as archived
    pub fn archived(mut self) -> Self {
        self.is_archived = true;
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let due_field =
            self.due_date.as_ref().map(|d| format!(r#","dueDate":{}"#, d)).unwrap_or_default();

        format!(
            r#"{{"id":"{}","subject":"{}"{},"isRead":{},"isArchived":{}}}"#,
            self.id, self.subject, due_field, self.is_read, self.is_archived
        )
    }
}

/// Helper to create a messages file covering several months around April 2024
pub fn realistic_messages_file() -> (TempDir, PathBuf) {
    MessageFileBuilder::new()
        .with_message(MessageBuilder::new("tax").due_date("2024-01-20T09:00:00Z"))
        .with_message(MessageBuilder::new("census").due_date("2024-02-10T12:00:00Z").read())
        .with_message(MessageBuilder::new("permit").due_date("2024-04-10T08:00:00Z"))
        .with_message(MessageBuilder::new("renewal").due_date("2024-04-25T08:00:00Z"))
        .with_message(MessageBuilder::new("newsletter"))
        .with_message(MessageBuilder::new("old-fine").due_date("2023-11-08T10:00:00Z").archived())
        .build()
}
