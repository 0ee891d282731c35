use std::f64::consts::PI;
use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::utils::sleep;

const RADIUS: f64 = 50.0;

/// Stroke dash values for a ring filled to `percentage`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub circumference: f64,
    pub offset: f64,
}

pub fn ring_geometry(percentage: u8) -> RingGeometry {
    let circumference = 2.0 * PI * RADIUS;
    let filled = f64::from(percentage.min(100)) / 100.0;
    RingGeometry {
        circumference,
        offset: circumference - filled * circumference,
    }
}

/// Circular skill gauge. Starts empty and fills to its value once mounted,
/// the CSS transition on the stroke does the animation.
#[component]
pub fn ProgressRing(label: &'static str, percentage: u8, tone: &'static str) -> Element {
    let mut revealed = use_signal(|| false);

    use_future(move || async move {
        sleep(Duration::from_millis(100)).await;
        revealed.set(true);
    });

    let shown = if revealed() { percentage } else { 0 };
    let geometry = ring_geometry(shown);
    let circumference = geometry.circumference;
    let offset = geometry.offset;

    rsx! {
        div { class: "c-ring c-ring--{tone}",
            div { class: "c-ring__gauge",
                svg {
                    class: "c-ring__svg",
                    view_box: "0 0 120 120",
                    circle {
                        class: "c-ring__track",
                        cx: "60",
                        cy: "60",
                        r: "{RADIUS}",
                        fill: "none",
                        stroke_width: "8",
                    }
                    circle {
                        class: "c-ring__value",
                        cx: "60",
                        cy: "60",
                        r: "{RADIUS}",
                        fill: "none",
                        stroke_width: "8",
                        stroke_linecap: "round",
                        stroke_dasharray: "{circumference}",
                        stroke_dashoffset: "{offset}",
                    }
                }
                span { class: "c-ring__percent", "{percentage}%" }
            }
            p { class: "c-ring__label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring_is_fully_offset() {
        let g = ring_geometry(0);
        assert!((g.offset - g.circumference).abs() < 1e-9);
    }

    #[test]
    fn test_full_ring_has_no_offset() {
        assert!(ring_geometry(100).offset.abs() < 1e-9);
    }

    #[test]
    fn test_partial_ring() {
        let g = ring_geometry(75);
        assert!((g.circumference - 314.159_265).abs() < 1e-3);
        assert!((g.offset - g.circumference * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert_eq!(ring_geometry(250), ring_geometry(100));
    }
}
