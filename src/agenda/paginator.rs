use chrono::{DateTime, Utc};

use super::window::{current_month_elapsed, month_sections};
use crate::models::{Section, Sections};
use crate::utils::{months_before, start_of_month};

/// How many past months to load in a batch
pub const PAST_DATA_MONTHS: u32 = 3;

/// The outcome of one pagination step: the newly revealed sections (oldest
/// month first) and the new watermark, the start of the oldest month loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub sections: Sections,
    pub watermark: DateTime<Utc>,
}

/// Reveal one more batch of past months
///
/// Pure function of a full-collection snapshot plus the watermark; the caller
/// applies the result atomically (prepending `sections` to the rendered
/// window) and discards it if the snapshot was superseded mid-flight.
///
/// The reference point is the watermark if present, otherwise the start of the
/// current month. The batch covers the `PAST_DATA_MONTHS` months strictly
/// before the reference point, furthest-back first, with a placeholder for
/// each month that has no deadlines. On the first call only, the current
/// month's elapsed days (start of month through end of yesterday) are appended
/// as well.
pub fn load_more(
    sections: &[Section],
    watermark: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> PageLoad {
    let reference = watermark.unwrap_or_else(|| start_of_month(now));

    let mut loaded: Sections = Vec::new();
    for back in (1..=PAST_DATA_MONTHS).rev() {
        loaded.extend(month_sections(sections, months_before(reference, back)));
    }

    if watermark.is_none() {
        loaded.extend(current_month_elapsed(sections, now));
    }

    PageLoad { sections: loaded, watermark: months_before(reference, PAST_DATA_MONTHS) }
}

/// Re-derive a rendered window from a freshly rebuilt full collection and the
/// previous watermark, by replaying pagination until that watermark is reached
///
/// An absent watermark means nothing was ever loaded, so the window is empty.
pub fn materialize_window(
    sections: &[Section],
    watermark: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Sections {
    let Some(stop) = watermark else {
        return Vec::new();
    };

    let mut window: Sections = Vec::new();
    let mut cursor: Option<DateTime<Utc>> = None;
    while cursor.is_none_or(|c| c > stop) {
        let page = load_more(sections, cursor, now);
        cursor = Some(page.watermark);
        // older pages sit above the previously revealed ones
        window.splice(0..0, page.sections);
    }

    window
}
