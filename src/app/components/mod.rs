pub mod button;
pub mod card;
pub mod chatbot;
pub mod common;
pub mod icon;
pub mod orbital_timeline;
pub mod progress_ring;
pub mod toaster;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use chatbot::Chatbot;
pub use common::{EmptyState, PageHero, SectionHeader};
pub use icon::Icon;
pub use orbital_timeline::OrbitalTimeline;
pub use progress_ring::{ring_geometry, ProgressRing, RingGeometry};
pub use toaster::Toaster;
