pub mod contact;
pub mod expertise;
pub mod home;
pub mod not_found;
pub mod routes;
pub mod services;
pub mod training;

pub use contact::Contact;
pub use expertise::Expertise;
pub use home::Home;
pub use not_found::PageNotFound;
pub use routes::{App, Route};
pub use services::Services;
pub use training::Training;
