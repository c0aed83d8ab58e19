//! Environment-driven settings for the database and the HTTP listener.

mod settings;

pub use settings::*;
