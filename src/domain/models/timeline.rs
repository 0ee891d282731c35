use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineStatus {
    Completed,
    InProgress,
    Pending,
}

impl TimelineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "COMPLETED",
            TimelineStatus::InProgress => "IN PROGRESS",
            TimelineStatus::Pending => "PENDING",
        }
    }

    /// BEM modifier for the status badge
    pub fn modifier(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "completed",
            TimelineStatus::InProgress => "in-progress",
            TimelineStatus::Pending => "pending",
        }
    }
}

/// Entry of the orbital timeline. `related_ids` point at other entries of
/// the same array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineItem {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub category: &'static str,
    pub glyph: &'static str,
    pub related_ids: &'static [u32],
    pub status: TimelineStatus,
    pub energy: u8,
}

pub const JOURNEY_TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        id: 1,
        title: "Company Founded",
        date: "2018",
        content: "Started with a vision to revolutionize technology solutions for businesses worldwide. First AI project completed.",
        category: "Foundation",
        glyph: "building",
        related_ids: &[2],
        status: TimelineStatus::Completed,
        energy: 100,
    },
    TimelineItem {
        id: 2,
        title: "Global Expansion",
        date: "2020",
        content: "Extended our services internationally, establishing partnerships in 15+ countries. 100+ successful projects completed.",
        category: "Growth",
        glyph: "globe",
        related_ids: &[1, 3],
        status: TimelineStatus::Completed,
        energy: 90,
    },
    TimelineItem {
        id: 3,
        title: "Innovation Leadership",
        date: "2022",
        content: "Launched cutting-edge blockchain and AI solutions, setting industry standards. Industry recognition awards received.",
        category: "Innovation",
        glyph: "award",
        related_ids: &[2, 4],
        status: TimelineStatus::Completed,
        energy: 95,
    },
    TimelineItem {
        id: 4,
        title: "Future Forward",
        date: "2024",
        content: "Leading the next wave of digital transformation with quantum computing and advanced AI. 500+ happy clients achieved.",
        category: "Future",
        glyph: "zap",
        related_ids: &[3],
        status: TimelineStatus::InProgress,
        energy: 85,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = JOURNEY_TIMELINE.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), JOURNEY_TIMELINE.len());
    }

    #[test]
    fn test_related_ids_reference_existing_items() {
        let ids: HashSet<_> = JOURNEY_TIMELINE.iter().map(|i| i.id).collect();
        for item in JOURNEY_TIMELINE {
            for related in item.related_ids {
                assert!(ids.contains(related), "item {} -> {}", item.id, related);
                assert_ne!(*related, item.id);
            }
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TimelineStatus::Completed.label(), "COMPLETED");
        assert_eq!(TimelineStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(TimelineStatus::Pending.label(), "PENDING");
        assert_eq!(
            serde_json::to_string(&TimelineStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }
}
