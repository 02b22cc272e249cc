//! Error types
//!
//! Library operations return [`CircleError`] or [`InputError`]; the binary
//! layers `anyhow` on top and adds file context through [`PlotContext`].

use std::path::Path;
use thiserror::Error;

/// Failures of circle geometry and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CircleError {
    /// Geometry or rendering was requested before `bind_to`
    #[error("circle is not bound to a container")]
    NotBound,
    /// `bind_to` was called on a circle that already has a container
    #[error("circle is already bound to a container; create a new circle to bind elsewhere")]
    AlreadyBound,
}

/// Failures while reading caller-supplied coordinates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("point coordinates must be a JSON array, got {0}")]
    NotASequence(String),
    #[error("malformed coordinates for point {index}: {reason}")]
    MalformedCoordinates { index: usize, reason: String },
}

pub type CircleResult<T> = Result<T, CircleError>;

/// Attach the file and operation to I/O and parse errors
pub trait PlotContext<T> {
    fn with_file_context(self, operation: &str, path: &Path) -> anyhow::Result<T>;
}

impl<T, E> PlotContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, operation: &str, path: &Path) -> anyhow::Result<T> {
        self.map_err(|e| anyhow::Error::new(e).context(format!("Failed to {operation} {}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_context_names_operation_and_path() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let error = result
            .with_file_context("read", Path::new("points.json"))
            .unwrap_err();
        assert_eq!(error.to_string(), "Failed to read points.json");
        assert_eq!(error.root_cause().to_string(), "gone");
    }
}
