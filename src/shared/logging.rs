//! Structured logging helpers
//!
//! Every interactive piece of the site logs through these so the events
//! carry the same `operation` field. Only the server entry point installs a
//! subscriber; in the browser the calls are no-ops.

/// Operation tag attached to every site event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    Timeline,
    ContactForm,
    Chat,
    Catalog,
    Toast,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::Timeline => "timeline",
            LogOperation::ContactForm => "contact_form",
            LogOperation::Chat => "chat",
            LogOperation::Catalog => "catalog",
            LogOperation::Toast => "toast",
        }
    }
}

pub fn log_route_change(path: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "Route changed"
    );
}

pub fn log_timeline_toggle(id: u32, expanded: bool, related: usize) {
    tracing::debug!(
        operation = LogOperation::Timeline.as_str(),
        item_id = id,
        expanded = expanded,
        related_count = related,
        "Timeline item toggled"
    );
}

pub fn log_form_step(step: &str) {
    tracing::debug!(
        operation = LogOperation::ContactForm.as_str(),
        step = step,
        "Contact form advanced"
    );
}

pub fn log_form_submitted(payload: &str) {
    tracing::info!(
        operation = LogOperation::ContactForm.as_str(),
        payload = payload,
        "Contact form submitted"
    );
}

pub fn log_form_submission_error(error: &str) {
    tracing::error!(
        operation = LogOperation::ContactForm.as_str(),
        error = error,
        "Contact form submission failed"
    );
}

pub fn log_chat_message(is_bot: bool, transcript_len: usize) {
    tracing::debug!(
        operation = LogOperation::Chat.as_str(),
        is_bot = is_bot,
        transcript_len = transcript_len,
        "Chat message appended"
    );
}

pub fn log_catalog_filter(category: &str, search: &str, results: usize) {
    tracing::trace!(
        operation = LogOperation::Catalog.as_str(),
        category = category,
        search = search,
        results = results,
        "Catalog filtered"
    );
}

pub fn log_toast(title: &str) {
    tracing::info!(
        operation = LogOperation::Toast.as_str(),
        title = title,
        "Toast shown"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Timeline.as_str(), "timeline");
        assert_eq!(LogOperation::ContactForm.as_str(), "contact_form");
        assert_eq!(LogOperation::Chat.as_str(), "chat");
        assert_eq!(LogOperation::Catalog.as_str(), "catalog");
        assert_eq!(LogOperation::Toast.as_str(), "toast");
    }
}
