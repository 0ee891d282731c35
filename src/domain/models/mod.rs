// Site content models
// Literal arrays held for the lifetime of a page view

pub mod glyph;
pub mod navigation;
pub mod content;
pub mod timeline;
pub mod catalog;
pub mod chat;
pub mod contact;

pub use glyph::Glyph;
pub use navigation::{FooterGroup, FooterLink, NavItem, SocialLink, FOOTER_GROUPS, NAV_ITEMS, SOCIAL_LINKS};
pub use content::{
    Achievement, JourneyMilestone, ServiceOffering, Skill, Stat, Testimonial, ACHIEVEMENTS,
    HOME_STATS, MILESTONES, SERVICES, SKILLS, TESTIMONIALS,
};
pub use timeline::{TimelineItem, TimelineStatus, JOURNEY_TIMELINE};
pub use catalog::{Product, CATEGORY_ALL, PRODUCTS, PRODUCT_CATEGORIES};
pub use chat::{ChatMessage, BOT_REPLY, INITIAL_GREETING, QUICK_ACTIONS};
pub use contact::{BusinessHours, ContactChannel, ContactFormData, FormField, FormStep, BUSINESS_HOURS, CONTACT_CHANNELS};
