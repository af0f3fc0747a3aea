//! Error types for the renderer

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a scene
#[derive(Error, Debug)]
pub enum Error {
    /// A canvas was requested with a zero-sized side. This is the only
    /// failure that aborts a scene and it is raised before any drawing
    /// happens; the message names the scene and the offending value.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A TrueType face could not be resolved. The engine recovers from this
    /// by falling back to the builtin bitmap face, so it only escapes when a
    /// specific face is requested directly.
    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    /// PNG encoding failed
    #[error("encoding failed: {0}")]
    Encode(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}
