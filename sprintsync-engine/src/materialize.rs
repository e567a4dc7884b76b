//! Create-once template materialization.
//!
//! Used for the daily standup: the generic skeleton under
//! `10_templates/` is copied to a date-keyed target with its
//! placeholder tokens substituted. An existing target is never
//! overwritten; the existence check runs before any I/O.

use std::path::{Path, PathBuf};

use sprintsync_core::RunContext;

use crate::error::{io_err, EngineError};
use crate::writer::atomic_write;

/// Outcome of one materialization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeOutcome {
    /// Target did not exist and was created from the template.
    Created { path: PathBuf },
    /// Target already exists; nothing was read or written.
    AlreadyExists { path: PathBuf },
    /// Template is missing; warned, nothing written.
    MissingTemplate { template: PathBuf },
}

impl MaterializeOutcome {
    /// True only for [`MaterializeOutcome::Created`].
    pub fn created(&self) -> bool {
        matches!(self, MaterializeOutcome::Created { .. })
    }
}

/// Materialize `target` from `template`, substituting `substitutions`
/// in the listed order.
///
/// Ordering is part of the contract: a token listed earlier is replaced
/// first, so later tokens must not overlap text earlier substitutions
/// introduce. The standup list (below) relies on this: the datetime
/// token embeds the bare date token and must go first.
pub fn materialize(
    template: &Path,
    target: &Path,
    substitutions: &[(String, String)],
) -> Result<MaterializeOutcome, EngineError> {
    if target.exists() {
        tracing::debug!("already exists, skipping: {}", target.display());
        return Ok(MaterializeOutcome::AlreadyExists {
            path: target.to_path_buf(),
        });
    }
    if !template.exists() {
        tracing::warn!("template not found: {}", template.display());
        return Ok(MaterializeOutcome::MissingTemplate {
            template: template.to_path_buf(),
        });
    }

    let mut content = std::fs::read_to_string(template).map_err(|e| io_err(template, e))?;
    for (token, value) in substitutions {
        content = content.replace(token.as_str(), value);
    }
    atomic_write(target, &content)?;

    tracing::info!("created: {}", target.display());
    Ok(MaterializeOutcome::Created {
        path: target.to_path_buf(),
    })
}

/// Token substitutions for the daily-standup template.
///
/// `YYYY-MM-DD HH:MM` must precede `YYYY-MM-DD`: replacing the bare
/// date first would eat the prefix of the datetime token.
pub fn standup_substitutions(ctx: &RunContext) -> Vec<(String, String)> {
    vec![
        ("YYYY-MM-DD HH:MM".to_string(), ctx.standup_timestamp()),
        ("Sprint XX".to_string(), ctx.sprint.label.clone()),
        ("YYYY-MM-DD".to_string(), ctx.today_iso()),
    ]
}
