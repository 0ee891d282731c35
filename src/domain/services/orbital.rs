//! Orbital timeline selection
//!
//! At most one item is expanded at a time. Expanding an item makes exactly
//! its `related_ids` pulse; collapsing it clears the pulse set.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::models::TimelineItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbitalSelection {
    expanded: BTreeMap<u32, bool>,
    active_id: Option<u32>,
    pulsing: BTreeSet<u32>,
}

/// Relations of `id`, empty when the id is not part of `items`
pub fn related_ids(items: &[TimelineItem], id: u32) -> &'static [u32] {
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.related_ids)
        .unwrap_or(&[])
}

impl OrbitalSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown ids leave the selection untouched
    pub fn toggle(&mut self, id: u32, items: &[TimelineItem]) {
        if !items.iter().any(|item| item.id == id) {
            return;
        }

        let was_expanded = self.is_expanded(id);

        for (key, open) in self.expanded.iter_mut() {
            if *key != id {
                *open = false;
            }
        }
        self.expanded.insert(id, !was_expanded);

        if was_expanded {
            self.active_id = None;
            self.pulsing.clear();
        } else {
            self.active_id = Some(id);
            self.pulsing = related_ids(items, id).iter().copied().collect();
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active_id
    }

    pub fn is_pulsing(&self, id: u32) -> bool {
        self.pulsing.contains(&id)
    }

    pub fn pulsing(&self) -> &BTreeSet<u32> {
        &self.pulsing
    }

    pub fn is_related_to_active(&self, id: u32, items: &[TimelineItem]) -> bool {
        match self.active_id {
            Some(active) => related_ids(items, active).contains(&id),
            None => false,
        }
    }

    pub fn expanded_ids(&self) -> Vec<u32> {
        self.expanded
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| *id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::JOURNEY_TIMELINE;

    #[test]
    fn test_toggle_twice_clears_everything() {
        for item in JOURNEY_TIMELINE {
            let mut selection = OrbitalSelection::new();
            selection.toggle(item.id, JOURNEY_TIMELINE);
            selection.toggle(item.id, JOURNEY_TIMELINE);

            assert!(selection.expanded_ids().is_empty());
            assert!(selection.pulsing().is_empty());
            assert_eq!(selection.active_id(), None);
        }
    }

    #[test]
    fn test_expanding_is_mutually_exclusive() {
        let mut selection = OrbitalSelection::new();
        selection.toggle(1, JOURNEY_TIMELINE);
        selection.toggle(3, JOURNEY_TIMELINE);

        assert_eq!(selection.expanded_ids(), vec![3]);
        assert!(!selection.is_expanded(1));
        assert_eq!(selection.active_id(), Some(3));
    }

    #[test]
    fn test_pulsing_equals_related_ids() {
        let expected: [(u32, &[u32]); 4] = [(1, &[2]), (2, &[1, 3]), (3, &[2, 4]), (4, &[3])];

        for (id, related) in expected {
            let mut selection = OrbitalSelection::new();
            selection.toggle(id, JOURNEY_TIMELINE);
            let want: BTreeSet<u32> = related.iter().copied().collect();
            assert_eq!(selection.pulsing(), &want, "item {}", id);
        }
    }

    #[test]
    fn test_switching_items_replaces_pulse_set() {
        let mut selection = OrbitalSelection::new();
        selection.toggle(2, JOURNEY_TIMELINE);
        selection.toggle(4, JOURNEY_TIMELINE);

        assert!(selection.is_pulsing(3));
        assert!(!selection.is_pulsing(1));
        assert!(selection.is_related_to_active(3, JOURNEY_TIMELINE));
        assert!(!selection.is_related_to_active(1, JOURNEY_TIMELINE));
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut selection = OrbitalSelection::new();
        selection.toggle(2, JOURNEY_TIMELINE);
        let before = selection.clone();

        selection.toggle(42, JOURNEY_TIMELINE);

        assert!(related_ids(JOURNEY_TIMELINE, 42).is_empty());
        assert_eq!(selection, before);
        assert_eq!(selection.expanded_ids(), vec![2]);
        assert_eq!(selection.active_id(), Some(2));
        assert!(!selection.is_expanded(42));
    }

    #[test]
    fn test_unknown_id_on_fresh_selection() {
        let mut selection = OrbitalSelection::new();
        selection.toggle(42, JOURNEY_TIMELINE);
        assert_eq!(selection, OrbitalSelection::new());
    }
}
