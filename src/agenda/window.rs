use chrono::{DateTime, Utc};

use crate::models::{Section, Sections};
use crate::utils::{end_of_month, end_of_yesterday, start_of_month};

/// Return all sections whose key lies in the inclusive `[from, to]` window,
/// preserving the stored (descending) order
///
/// Equivalent to filtering every section with the range predicate; the scan
/// only terminates early once keys fall below `from`, which is the direction
/// consistent with the descending sort.
pub fn sections_in_window(sections: &[Section], from: DateTime<Utc>, to: DateTime<Utc>) -> Sections {
    let mut filtered: Sections = Vec::new();

    for section in sections {
        let key = section.key();
        if key > to {
            // still above the window, in-range keys come later
            continue;
        }
        if key < from {
            // keys are descending: everything from here on is older
            break;
        }
        filtered.push(section.clone());
    }

    filtered
}

/// Return the sections of the month starting at `month_start`; if the month
/// has no deadlines, a single placeholder section keyed at the month start
pub fn month_sections(sections: &[Section], month_start: DateTime<Utc>) -> Sections {
    let mut selected = sections_in_window(sections, month_start, end_of_month(month_start));

    if selected.is_empty() {
        selected.push(Section::EmptyMonth { month_start });
    }

    selected
}

/// Return the current month's already-elapsed days: sections between the start
/// of the month and the end of yesterday
pub fn current_month_elapsed(sections: &[Section], now: DateTime<Utc>) -> Sections {
    sections_in_window(sections, start_of_month(now), end_of_yesterday(now))
}
