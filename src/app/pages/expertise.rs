use dioxus::prelude::*;

use crate::app::components::{Icon, PageHero, ProgressRing, SectionHeader};
use crate::domain::models::{JourneyMilestone, ACHIEVEMENTS, MILESTONES, SKILLS};

#[component]
pub fn Expertise() -> Element {
    rsx! {
        PageHero {
            subtitle: "Years of innovation, countless successful projects, and unwavering commitment to excellence",
            "Our Expertise"
        }

        section { class: "c-section",
            SectionHeader {
                title: "Our Journey",
                subtitle: "Milestones that shaped our success story",
            }
            div { class: "c-journey",
                div { class: "c-journey__axis" }
                for (index, milestone) in MILESTONES.iter().enumerate() {
                    MilestoneRow { key: "{milestone.year}", milestone: *milestone, index: index }
                }
            }
        }

        section { class: "c-section c-section--muted",
            SectionHeader {
                title: "Strategic Vision",
                subtitle: "Core competencies that drive innovation",
            }
            div { class: "c-grid c-grid--4",
                for skill in SKILLS.iter() {
                    ProgressRing {
                        key: "{skill.name}",
                        label: skill.name,
                        percentage: skill.percentage,
                        tone: skill.tone,
                    }
                }
            }
        }

        section { class: "c-achievements",
            for achievement in ACHIEVEMENTS.iter() {
                div { key: "{achievement.label}", class: "c-achievements__item",
                    Icon { name: achievement.glyph, class: "c-achievements__icon".to_string() }
                    div { class: "c-achievements__value", "{achievement.value}" }
                    div { class: "c-achievements__label", "{achievement.label}" }
                }
            }
        }
    }
}

#[component]
fn MilestoneRow(milestone: JourneyMilestone, index: usize) -> Element {
    let side = if index % 2 == 0 { "left" } else { "right" };

    rsx! {
        div { class: "c-journey__row c-journey__row--{side}",
            div { class: "c-journey__marker", "{milestone.year}" }
            div { class: "c-journey__card",
                h3 { class: "c-journey__title", "{milestone.title}" }
                p { class: "c-journey__description", "{milestone.description}" }
                div { class: "c-journey__achievement",
                    Icon { name: "award" }
                    " {milestone.achievement}"
                }
            }
        }
    }
}
