//! Core application functionality
//!
//! This module contains the application shell around the pipeline:
//! - Window application setup
//! - Settings, config file and CLI handling
//! - Error types
//! - Running headless or windowed

pub mod app;
pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use app::create_app;
pub use config::{CliArgs, PlotSettings};
pub use errors::{CircleError, CircleResult, InputError};
pub use runner::run_app;
