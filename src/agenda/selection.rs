use std::collections::BTreeSet;

/// Selection-mode bookkeeping for bulk actions on agenda items.
///
/// Inactive until the first item is toggled. The agenda only reports the
/// selected ids; acting on them (archival) belongs to the messaging store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<BTreeSet<String>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether selection mode is active.
    pub fn is_active(&self) -> bool {
        self.selected.is_some()
    }

    /// Toggle a single item. Activates selection mode with just that item when
    /// it was inactive.
    pub fn toggle_item(&mut self, id: &str) {
        match &mut self.selected {
            Some(ids) => {
                if !ids.remove(id) {
                    ids.insert(id.to_string());
                }
            }
            None => {
                self.selected = Some(BTreeSet::from([id.to_string()]));
            }
        }
    }

    /// Select everything, or clear the selection when everything was already
    /// selected. No-op while selection mode is inactive.
    pub fn toggle_all<I>(&mut self, all_ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        let Some(selected) = &mut self.selected else {
            return;
        };

        let all: BTreeSet<String> = all_ids.into_iter().collect();
        if *selected == all {
            selected.clear();
        } else {
            *selected = all;
        }
    }

    /// Leave selection mode, dropping any selection.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// The currently selected ids, if selection mode is active.
    pub fn selected_ids(&self) -> Option<&BTreeSet<String>> {
        self.selected.as_ref()
    }

    /// Hand the selected ids to an external action (e.g. archival) and leave
    /// selection mode.
    pub fn take_selected(&mut self) -> Vec<String> {
        self.selected.take().map(|ids| ids.into_iter().collect()).unwrap_or_default()
    }
}
