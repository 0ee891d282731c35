// Interactive state machines behind the site's widgets
// Framework-free; the hooks in shared::hooks wrap them in signals

pub mod orbital;
pub mod conversational_form;
pub mod chat_session;
pub mod catalog_filter;
pub mod contact_submitter;

pub use orbital::{related_ids, OrbitalSelection};
pub use conversational_form::{Advance, ConversationalForm};
pub use chat_session::{ChatSession, PendingReply};
pub use catalog_filter::CatalogFilter;
pub use contact_submitter::{ContactSubmitter, SimulatedSubmitter};
