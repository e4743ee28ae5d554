use chrono::{DateTime, Utc};

use crate::models::{DeadlineItem, Section};
use crate::utils::start_of_day;

/// Id of the last deadline: the first item of the final (earliest-due)
/// section, since sections are ordered descending
///
/// `None` if the collection is empty or the final section is a placeholder.
pub fn last_deadline_id(sections: &[Section]) -> Option<String> {
    match sections.last()? {
        Section::Day(section) => section.items.first().map(|item| item.id.clone()),
        Section::EmptyMonth { .. } => None,
    }
}

/// Id of the next upcoming deadline: among each section's first item, the one
/// with the smallest due date that is today or later
///
/// Ties on the due date keep the item encountered first in collection order.
/// `None` when no section's first item is due today or in the future.
pub fn next_deadline_id(sections: &[Section], now: DateTime<Utc>) -> Option<String> {
    let today = start_of_day(now);

    let mut next: Option<&DeadlineItem> = None;
    for section in sections {
        let Some(item) = section.first_item() else {
            continue;
        };
        if item.due_date < today {
            continue;
        }
        match next {
            Some(best) if best.due_date <= item.due_date => {}
            _ => next = Some(item),
        }
    }

    next.map(|item| item.id.clone())
}

/// Whether the rendered window already contains the last deadline, i.e. no
/// further backward pagination can reveal anything new
///
/// An absent `last_deadline_id` means there are no deadlines at all, which
/// counts as fully loaded: there is nothing left to page in.
pub fn is_fully_loaded(last_deadline_id: Option<&str>, rendered: &[Section]) -> bool {
    match last_deadline_id {
        None => true,
        Some(last_id) => {
            rendered.iter().flat_map(|section| section.items()).any(|item| item.id == last_id)
        }
    }
}
