//! Error types for sprintsync-engine.

use std::path::PathBuf;

use thiserror::Error;

use sprintsync_renderer::RenderError;

use crate::pipeline::Step;

/// All errors that can arise from synchronization operations.
///
/// Missing tracked documents and templates are *not* errors; they are
/// non-fatal outcomes surfaced through [`crate::patcher::PatchOutcome`]
/// and [`crate::materialize::MaterializeOutcome`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// An error from the report renderer.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pipeline step failed; remaining steps were not run.
    #[error("step '{step}' failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// The pipeline step this error occurred in, if known.
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            EngineError::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Convenience constructor for [`EngineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EngineError {
    EngineError::Io {
        path: path.into(),
        source,
    }
}
