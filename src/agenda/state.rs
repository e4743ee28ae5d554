use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::boundary::{is_fully_loaded, last_deadline_id, next_deadline_id};
use super::paginator::{load_more, materialize_window};
use super::sections::build_sections;
use crate::models::{Message, Sections};

/// The derived agenda for one snapshot of the message collection.
///
/// Holds the full section collection, the rendered window revealed so far, and
/// the pagination watermark. All transitions are pure: a source-collection
/// change goes through [`AgendaState::rebuild`], which recomputes everything
/// from the new messages and re-derives the window from the old watermark
/// instead of mutating carried-over state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaState {
    sections: Sections,
    rendered: Sections,
    watermark: Option<DateTime<Utc>>,
    last_deadline_id: Option<String>,
    next_deadline_id: Option<String>,
}

impl AgendaState {
    /// Build the initial agenda: full sections and boundary ids computed,
    /// nothing rendered yet, watermark absent.
    pub fn build(messages: &[Message], now: DateTime<Utc>) -> Self {
        let sections = build_sections(messages);
        let last_deadline_id = last_deadline_id(&sections);
        let next_deadline_id = next_deadline_id(&sections, now);

        Self {
            sections,
            rendered: Vec::new(),
            watermark: None,
            last_deadline_id,
            next_deadline_id,
        }
    }

    /// Rebuild after the source message collection changed.
    ///
    /// The full collection and boundary ids are recomputed from scratch; the
    /// rendered window is re-derived by replaying pagination against the new
    /// collection up to the previous watermark. Any in-flight page computed
    /// against the old collection must be discarded by the caller.
    pub fn rebuild(&self, messages: &[Message], now: DateTime<Utc>) -> Self {
        let sections = build_sections(messages);
        let rendered = materialize_window(&sections, self.watermark, now);
        let last_deadline_id = last_deadline_id(&sections);
        let next_deadline_id = next_deadline_id(&sections, now);

        Self { sections, rendered, watermark: self.watermark, last_deadline_id, next_deadline_id }
    }

    /// Reveal one more batch of past months, prepending the new sections to
    /// the rendered window and advancing the watermark atomically.
    pub fn load_more(&mut self, now: DateTime<Utc>) {
        let page = load_more(&self.sections, self.watermark, now);
        self.watermark = Some(page.watermark);

        let mut rendered = page.sections;
        rendered.append(&mut self.rendered);
        self.rendered = rendered;
    }

    /// The full section collection for the current snapshot.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// The sections revealed so far, oldest loaded month first.
    pub fn rendered(&self) -> &Sections {
        &self.rendered
    }

    /// Start of the oldest month already materialized, if any.
    pub fn watermark(&self) -> Option<DateTime<Utc>> {
        self.watermark
    }

    /// Id of the earliest-due deadline in the full collection.
    pub fn last_deadline_id(&self) -> Option<&str> {
        self.last_deadline_id.as_deref()
    }

    /// Id of the soonest deadline due today or later.
    pub fn next_deadline_id(&self) -> Option<&str> {
        self.next_deadline_id.as_deref()
    }

    /// Whether further backward pagination can reveal anything new.
    pub fn is_fully_loaded(&self) -> bool {
        is_fully_loaded(self.last_deadline_id.as_deref(), &self.rendered)
    }

    /// Every real item id in the full collection, in section order and
    /// deduplicated. Used by callers for select-all handling.
    pub fn message_ids(&self) -> Vec<String> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut ids: Vec<String> = Vec::new();
        for item in self.sections.iter().flat_map(|section| section.items()) {
            if seen.insert(&item.id) {
                ids.push(item.id.clone());
            }
        }
        ids
    }
}
