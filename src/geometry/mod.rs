//! Geometric Primitives and Operations

pub mod coords;
pub mod projection;

// Re-export commonly used items
pub use coords::Coords;
pub use projection::{diameter, is_culled, ratio, Projection};
