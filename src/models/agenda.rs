use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message that qualified for the agenda: archived messages and messages
/// without a due date never become items, so the due date here is required.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineItem {
    pub id: String,
    pub subject: String,
    pub due_date: DateTime<Utc>,
    pub is_read: bool,
}

/// A contiguous run of deadlines sharing a calendar day.
///
/// Invariant: `items` is non-empty and every item's due date falls on `day`
/// (a UTC start-of-day instant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySection {
    pub day: DateTime<Utc>,
    pub items: Vec<DeadlineItem>,
}

/// One section of the agenda.
///
/// `EmptyMonth` is the placeholder the paginator synthesizes for a month with
/// no deadlines, so a continuous monthly timeline can still be rendered.
/// Consumers pattern-match instead of probing a "fake" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Day(DaySection),
    EmptyMonth { month_start: DateTime<Utc> },
}

/// Sections ordered by strictly descending key (most future first).
pub type Sections = Vec<Section>;

impl Section {
    /// The section key: start of day for a day section, start of month for a
    /// placeholder.
    pub fn key(&self) -> DateTime<Utc> {
        match self {
            Section::Day(section) => section.day,
            Section::EmptyMonth { month_start } => *month_start,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Section::EmptyMonth { .. })
    }

    /// The real items in this section (empty for a placeholder).
    pub fn items(&self) -> &[DeadlineItem] {
        match self {
            Section::Day(section) => &section.items,
            Section::EmptyMonth { .. } => &[],
        }
    }

    pub fn first_item(&self) -> Option<&DeadlineItem> {
        self.items().first()
    }
}
