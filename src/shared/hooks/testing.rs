//! Helpers for mounting hooks in a headless `VirtualDom` on tokio's paused clock

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use tokio::time::Instant;

/// Process tasks and re-render until the (virtual) clock reaches `deadline`
pub async fn run_until(dom: &mut VirtualDom, deadline: Instant) {
    loop {
        let woke = tokio::select! {
            _ = dom.wait_for_work() => true,
            _ = tokio::time::sleep_until(deadline) => false,
        };
        if !woke {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
