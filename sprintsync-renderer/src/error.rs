//! Error types for sprintsync-renderer.

use thiserror::Error;

/// All errors that can arise from report rendering.
///
/// Context serialization failures surface through [`tera::Error`] as
/// well, so a single variant covers the whole render path.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
