use dioxus::prelude::*;

use crate::domain::models::TimelineItem;
use crate::domain::services::{related_ids, OrbitalSelection};
use crate::shared::logging::log_timeline_toggle;

/// Selection state of one orbital timeline; resets on remount
#[derive(Clone, Copy, PartialEq)]
pub struct OrbitalTimelineState {
    pub selection: Signal<OrbitalSelection>,
    pub items: &'static [TimelineItem],
}

impl OrbitalTimelineState {
    pub fn toggle(&self, id: u32) {
        let items = self.items;
        let mut selection = self.selection;
        selection.write().toggle(id, items);

        let expanded = self.selection.read().is_expanded(id);
        log_timeline_toggle(id, expanded, related_ids(items, id).len());
    }

    pub fn title_of(&self, id: u32) -> Option<&'static str> {
        self.items.iter().find(|i| i.id == id).map(|i| i.title)
    }
}

pub fn use_orbital_timeline(items: &'static [TimelineItem]) -> OrbitalTimelineState {
    let selection = use_signal(OrbitalSelection::new);
    OrbitalTimelineState { selection, items }
}
