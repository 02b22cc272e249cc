//! Rendering front ends
//!
//! - Bevy plugin that plots the circle in a window
//! - Headless snapshots of the in-memory display tree

pub mod circle_plugin;
pub mod snapshot;

// Re-export commonly used items
pub use circle_plugin::{CirclePlotPlugin, PendingPoints, PlotContainer, PlottedCircle};
pub use snapshot::{Snapshot, SnapshotNode};
