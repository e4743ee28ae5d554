use crate::models::{DaySection, DeadlineItem, Message, Section, Sections};
use crate::utils::start_of_day;

/// Build date-bucketed sections from a flat message collection
///
/// Archived messages and messages without a due date are dropped; the rest are
/// sorted by due date descending (furthest future first) and grouped into one
/// section per calendar day. The sort is stable, so messages sharing the exact
/// same due date instant keep their input order.
///
/// The resulting keys are strictly decreasing with no duplicates, and every
/// section holds at least one item.
pub fn build_sections(messages: &[Message]) -> Sections {
    let mut items: Vec<DeadlineItem> = messages
        .iter()
        .filter(|message| !message.is_archived)
        .filter_map(|message| {
            message.due_date.map(|due_date| DeadlineItem {
                id: message.id.clone(),
                subject: message.subject.clone(),
                due_date,
                is_read: message.is_read,
            })
        })
        .collect();

    // sort_by is stable: equal due dates preserve input order
    items.sort_by(|a, b| b.due_date.cmp(&a.due_date));

    let mut sections: Sections = Vec::new();
    for item in items {
        let day = start_of_day(item.due_date);
        if let Some(Section::Day(section)) = sections.last_mut() {
            if section.day == day {
                section.items.push(item);
                continue;
            }
        }
        sections.push(Section::Day(DaySection { day, items: vec![item] }));
    }

    sections
}
