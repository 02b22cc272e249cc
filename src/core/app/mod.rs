//! Window application setup
//!
//! - App builder functions
//! - Plugin configuration

pub mod builder;
pub mod plugins;

pub use builder::create_app;
