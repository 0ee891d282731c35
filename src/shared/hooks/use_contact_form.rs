use std::time::Duration;

use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::domain::services::{Advance, ContactSubmitter, ConversationalForm, SimulatedSubmitter};
use crate::shared::hooks::{use_toast, ToastQueue};
use crate::shared::logging::{log_form_step, log_form_submission_error};

/// Conversational form bound to the contact page. The submission runs in a
/// task owned by the calling component, so leaving the page drops it.
#[derive(Clone, Copy)]
pub struct ContactFormState {
    pub form: Signal<ConversationalForm>,
    toasts: ToastQueue,
    submit_delay: Duration,
}

impl ContactFormState {
    pub fn set_field(&self, value: String) {
        let mut form = self.form;
        form.write().set_field(value);
    }

    pub fn advance(&self) {
        let mut form = self.form;
        let outcome = form.write().advance();
        match outcome {
            Ok(Advance::Moved(_)) => log_form_step(self.form.peek().step().key),
            Ok(Advance::Submit(data)) => {
                let toasts = self.toasts;
                let submitter = SimulatedSubmitter::new(self.submit_delay);

                spawn(async move {
                    match submitter.submit(data).await {
                        Ok(()) => {
                            toasts.push(
                                "Message sent successfully!",
                                "We'll get back to you within 24 hours.",
                            );
                            form.write().finish_submission();
                            log_form_step(form.peek().step().key);
                        }
                        Err(e) => {
                            log_form_submission_error(&e.to_string());
                            form.write().cancel_submission();
                        }
                    }
                });
            }
            Err(e) => tracing::debug!("Contact form advance blocked: {}", e),
        }
    }

    pub fn reset(&self) {
        let mut form = self.form;
        form.write().reset();
    }
}

pub fn use_contact_form() -> ContactFormState {
    let config = use_site_config();
    let form = use_signal(ConversationalForm::new);
    let toasts = use_toast();

    ContactFormState {
        form,
        toasts,
        submit_delay: config.submit_delay,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::shared::hooks::testing::run_until;
    use crate::shared::hooks::use_toast_provider;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Snapshot {
        step: &'static str,
        submitting: bool,
        toasts: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct Seen(Rc<RefCell<Snapshot>>);

    #[component]
    fn FormHost() -> Element {
        use_toast_provider(Duration::from_secs(4));
        rsx! { FilledForm {} }
    }

    /// Fills every field and submits right after mounting
    #[component]
    fn FilledForm() -> Element {
        let contact = use_contact_form();
        let seen = use_context::<Seen>();

        use_hook(move || {
            spawn(async move {
                for value in ["Ada Lovelace", "ada@example.com", "Tell me about training"] {
                    contact.set_field(value.to_string());
                    contact.advance();
                }
            });
        });

        let toasts = contact.toasts.toasts.read().iter().map(|t| t.title.clone()).collect();
        let form = contact.form.read();
        *seen.0.borrow_mut() = Snapshot {
            step: form.step().key,
            submitting: form.is_submitting(),
            toasts,
        };

        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_completes_after_delay_with_toast() {
        let seen = Seen::default();
        let mut dom = VirtualDom::new(FormHost).with_root_context(seen.clone());
        dom.rebuild_in_place();
        let start = tokio::time::Instant::now();

        run_until(&mut dom, start + Duration::from_millis(1500)).await;
        assert_eq!(
            *seen.0.borrow(),
            Snapshot {
                step: "message",
                submitting: true,
                toasts: vec![],
            }
        );

        run_until(&mut dom, start + Duration::from_millis(2100)).await;
        assert_eq!(
            *seen.0.borrow(),
            Snapshot {
                step: "complete",
                submitting: false,
                toasts: vec!["Message sent successfully!".to_string()],
            }
        );
    }
}
