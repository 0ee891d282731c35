pub mod footer;
pub mod navbar;

pub use footer::Footer;
pub use navbar::{is_nav_active, route_for, Navbar};
