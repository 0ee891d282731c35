//! Site-wide settings
//!
//! Everything here is a literal: the site has no configuration file and no
//! environment surface beyond what `dioxus::serve` and `RUST_LOG` read on
//! the server side.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub company_name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub copyright_year: i32,
    /// Delay before the chat widget posts its canned reply
    pub reply_delay: Duration,
    /// Simulated latency of the contact form submission
    pub submit_delay: Duration,
    /// How long a toast stays on screen
    pub toast_duration: Duration,
    /// Scroll offset (px) past which the navbar turns opaque
    pub scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "FutureTech",
            tagline: "Empowering businesses with cutting-edge technology solutions. \
                      We transform ideas into innovative digital experiences.",
            email: "hello@futuretech.com",
            phone: "+1 (555) 123-4567",
            location: "San Francisco, CA",
            copyright_year: 2024,
            reply_delay: Duration::from_secs(1),
            submit_delay: Duration::from_secs(2),
            toast_duration: Duration::from_secs(4),
            scroll_threshold: 20.0,
        }
    }
}

/// Read the config provided by the layout, falling back to the defaults
/// when a component is rendered outside of it (tests, previews).
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = SiteConfig::default();
        assert_eq!(config.reply_delay, Duration::from_secs(1));
        assert_eq!(config.submit_delay, Duration::from_secs(2));
        assert!(config.toast_duration > config.submit_delay);
    }

    #[test]
    fn test_default_contact_details() {
        let config = SiteConfig::default();
        assert_eq!(config.email, "hello@futuretech.com");
        assert_eq!(config.location, "San Francisco, CA");
        assert_eq!(config.scroll_threshold, 20.0);
    }
}
