// Domain layer: static site content and the interactive state machines.
// Pure Rust, no framework dependencies.
pub mod models;
pub mod services;
