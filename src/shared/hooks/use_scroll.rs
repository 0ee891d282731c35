use dioxus::prelude::*;

const SCROLL_LISTENER_JS: &str = r#"
    window.__siteScrollListener && window.removeEventListener('scroll', window.__siteScrollListener);
    window.__siteScrollListener = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', window.__siteScrollListener, { passive: true });
    dioxus.send(window.scrollY);
"#;

const SCROLL_CLEANUP_JS: &str = r#"
    if (window.__siteScrollListener) {
        window.removeEventListener('scroll', window.__siteScrollListener);
        window.__siteScrollListener = null;
    }
"#;

pub fn is_scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the window is scrolled past `threshold` pixels
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(offset) = listener.recv::<f64>().await {
            let past = is_scrolled_past(offset, threshold);
            if *scrolled.peek() != past {
                scrolled.set(past);
            }
        }
    });

    use_drop(|| {
        let _ = document::eval(SCROLL_CLEANUP_JS);
    });

    scrolled
}

/// Jump back to the top of the page, as a full page load would
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {
    // Nothing to scroll when rendering on the server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_scrolled_past(0.0, 20.0));
        assert!(!is_scrolled_past(20.0, 20.0));
        assert!(is_scrolled_past(20.5, 20.0));
    }
}
