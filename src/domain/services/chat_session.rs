//! Chat widget transcript
//!
//! `send` appends the visitor's line right away and hands back a
//! [`PendingReply`]; whoever owns the session waits the reply delay and
//! then calls `deliver`. Dropping the token instead means no reply.

use crate::domain::models::{ChatMessage, BOT_REPLY, INITIAL_GREETING, QUICK_ACTIONS};

/// A bot reply owed for a sent message
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pending reply is only posted once delivered"]
pub struct PendingReply {
    pub in_reply_to: uuid::Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    open: bool,
    messages: Vec<ChatMessage>,
    draft: String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage::bot(INITIAL_GREETING)],
            draft: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Quick actions are offered until the visitor sends something
    pub fn quick_actions(&self) -> &'static [&'static str] {
        if self.messages.len() == 1 {
            QUICK_ACTIONS
        } else {
            &[]
        }
    }

    /// Send the current draft
    pub fn send_draft(&mut self) -> Option<PendingReply> {
        let draft = std::mem::take(&mut self.draft);
        let pending = self.send(&draft);
        if pending.is_none() {
            self.draft = draft;
        }
        pending
    }

    pub fn send(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        let message = ChatMessage::user(text);
        let pending = PendingReply {
            in_reply_to: message.id,
        };
        self.messages.push(message);
        self.draft.clear();
        Some(pending)
    }

    pub fn deliver(&mut self, _reply: PendingReply) {
        self.messages.push(ChatMessage::bot(BOT_REPLY));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_with_greeting() {
        let session = ChatSession::new();
        assert!(!session.is_open());
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].is_bot);
        assert_eq!(session.messages()[0].content, INITIAL_GREETING);
        assert_eq!(session.quick_actions().len(), 4);
    }

    #[test]
    fn test_send_appends_one_user_message() {
        let mut session = ChatSession::new();
        session.set_draft("hello".to_string());
        let pending = session.send_draft().expect("reply scheduled");

        assert_eq!(session.messages().len(), 2);
        let sent = &session.messages()[1];
        assert!(!sent.is_bot);
        assert_eq!(sent.content, "hello");
        assert_eq!(pending.in_reply_to, sent.id);
        assert_eq!(session.draft(), "");
        assert!(session.quick_actions().is_empty());

        session.deliver(pending);
        assert_eq!(session.messages().len(), 3);
        let reply = &session.messages()[2];
        assert!(reply.is_bot);
        assert_eq!(reply.content, BOT_REPLY);
    }

    #[test]
    fn test_rapid_sends_keep_order() {
        let mut session = ChatSession::new();
        let first = session.send("first").unwrap();
        let second = session.send("second").unwrap();
        session.deliver(first);
        session.deliver(second);

        let contents: Vec<_> = session
            .messages()
            .iter()
            .map(|m| (m.content.as_str(), m.is_bot))
            .collect();
        assert_eq!(
            contents,
            vec![
                (INITIAL_GREETING, true),
                ("first", false),
                ("second", false),
                (BOT_REPLY, true),
                (BOT_REPLY, true),
            ]
        );
    }

    #[test]
    fn test_blank_messages_are_ignored() {
        let mut session = ChatSession::new();
        session.set_draft("   ".to_string());
        assert!(!session.can_send());
        assert!(session.send_draft().is_none());
        assert_eq!(session.draft(), "   ");
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_quick_action_behaves_like_typing() {
        let mut session = ChatSession::new();
        let _ = session.send(QUICK_ACTIONS[2]).unwrap();
        assert_eq!(session.messages()[1].content, "Schedule Consultation");
        assert!(!session.messages()[1].is_bot);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut session = ChatSession::new();
        let reply = session.send("a").unwrap();
        session.deliver(reply);
        let ids: std::collections::HashSet<_> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 3);
    }
}
