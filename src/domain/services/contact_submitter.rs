//! Contact form submission seam
//!
//! There is no backend: the only implementation waits a fixed delay and
//! accepts the message. A real integration would implement
//! [`ContactSubmitter`] and surface its own error kinds.

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::domain::models::ContactFormData;
use crate::shared::errors::Result;
use crate::shared::logging::log_form_submitted;
use crate::shared::utils::timer::sleep;

pub trait ContactSubmitter {
    fn submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<()>>;
}

/// Pretends to post the form: waits `delay`, logs the payload, succeeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<()>> {
        let delay = self.delay;
        async move {
            let payload = serde_json::to_string(&data)?;
            sleep(delay).await;
            log_form_submitted(&payload);
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submit_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_secs(2));
        let data = ContactFormData {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };

        let start = Instant::now();
        submitter.submit(data).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
