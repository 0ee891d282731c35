use std::time::Duration;

use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::domain::services::{ChatSession, PendingReply};
use crate::shared::logging::log_chat_message;
use crate::shared::utils::timer::sleep;

/// Chat widget state. Replies are scheduled with `spawn`, so they belong to
/// the calling component and stop with it.
#[derive(Clone, Copy)]
pub struct ChatbotState {
    pub session: Signal<ChatSession>,
    reply_delay: Duration,
}

impl ChatbotState {
    pub fn open(&self) {
        let mut session = self.session;
        session.write().open();
    }

    pub fn close(&self) {
        let mut session = self.session;
        session.write().close();
    }

    pub fn set_draft(&self, draft: String) {
        let mut session = self.session;
        session.write().set_draft(draft);
    }

    pub fn send_draft(&self) {
        let mut session = self.session;
        let pending = session.write().send_draft();
        self.schedule(pending);
    }

    /// Quick actions go through here
    pub fn send(&self, text: &str) {
        let mut session = self.session;
        let pending = session.write().send(text);
        self.schedule(pending);
    }

    fn schedule(&self, pending: Option<PendingReply>) {
        let Some(reply) = pending else {
            return;
        };
        log_chat_message(false, self.session.peek().messages().len());

        let mut session = self.session;
        let delay = self.reply_delay;
        spawn(async move {
            sleep(delay).await;
            session.write().deliver(reply);
            log_chat_message(true, session.peek().messages().len());
        });
    }
}

pub fn use_chatbot() -> ChatbotState {
    let config = use_site_config();
    let session = use_signal(ChatSession::new);

    ChatbotState {
        session,
        reply_delay: config.reply_delay,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::models::BOT_REPLY;
    use crate::shared::hooks::testing::run_until;

    /// Transcript as seen by the last render of the test component
    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Vec<(bool, String)>>>);

    /// Messages the test component sends right after mounting
    #[derive(Clone)]
    struct Script(&'static [&'static str]);

    fn mount(script: &'static [&'static str]) -> (VirtualDom, Seen) {
        let seen = Seen::default();
        let mut dom = VirtualDom::new(ChatHost)
            .with_root_context(seen.clone())
            .with_root_context(Script(script));
        dom.rebuild_in_place();
        (dom, seen)
    }

    #[component]
    fn ChatHost() -> Element {
        let chat = use_chatbot();
        let seen = use_context::<Seen>();
        let script = use_context::<Script>();

        use_hook(move || {
            spawn(async move {
                for text in script.0 {
                    chat.send(text);
                }
            });
        });

        *seen.0.borrow_mut() = chat
            .session
            .read()
            .messages()
            .iter()
            .map(|m| (m.is_bot, m.content.clone()))
            .collect();

        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_after_delay_exactly_once() {
        let (mut dom, seen) = mount(&["hello"]);
        let start = tokio::time::Instant::now();

        run_until(&mut dom, start + Duration::from_millis(500)).await;
        {
            let transcript = seen.0.borrow();
            assert_eq!(transcript.len(), 2);
            assert_eq!(transcript[1], (false, "hello".to_string()));
        }

        run_until(&mut dom, start + Duration::from_millis(1100)).await;
        assert_eq!(seen.0.borrow().len(), 3);
        assert_eq!(seen.0.borrow()[2], (true, BOT_REPLY.to_string()));

        run_until(&mut dom, start + Duration::from_secs(5)).await;
        let bot_replies = seen.0.borrow().iter().filter(|(is_bot, _)| *is_bot).count();
        // greeting + one reply
        assert_eq!(bot_replies, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_sends_get_one_reply_each_in_order() {
        let (mut dom, seen) = mount(&["first", "second"]);
        let start = tokio::time::Instant::now();

        run_until(&mut dom, start + Duration::from_millis(500)).await;
        assert_eq!(seen.0.borrow().len(), 3);

        run_until(&mut dom, start + Duration::from_secs(3)).await;
        let transcript = seen.0.borrow();
        let senders: Vec<bool> = transcript.iter().map(|(is_bot, _)| *is_bot).collect();
        assert_eq!(senders, vec![true, false, false, true, true]);
        assert_eq!(transcript[1].1, "first");
        assert_eq!(transcript[2].1, "second");
    }
}
