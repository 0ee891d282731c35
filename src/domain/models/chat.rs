use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const INITIAL_GREETING: &str = "Hi, how can I help you today?";

pub const BOT_REPLY: &str = "Thanks for your message! Our team will get back to you shortly. \
In the meantime, feel free to explore our services or schedule a consultation.";

/// Canned prompts offered before the visitor says anything
pub const QUICK_ACTIONS: &[&str] = &[
    "Start Account Opening",
    "Learn About Services",
    "Schedule Consultation",
    "Get Pricing Info",
];

/// One line of the chat widget transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, false)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(content, true)
    }

    fn new(content: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            is_bot,
            timestamp: Utc::now(),
        }
    }

    /// "14:05" style label in the visitor's local time
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}
