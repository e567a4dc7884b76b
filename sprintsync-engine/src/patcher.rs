//! Locate-and-replace patching of tracked documents.
//!
//! A [`PatchRule`] pairs a [`Locator`] with a replacement builder.
//! Rules are applied in order against the *current* text (a later rule
//! sees earlier rewrites), each matching at most one region; text
//! outside matched regions is never touched. Non-matching rules are
//! skipped silently.
//!
//! Every rule in [`crate::rules`] is written so its locator matches its
//! own replacement output: repeated runs with an unchanged context
//! converge to byte-identical documents instead of drifting.

use std::path::Path;

use regex::Regex;

use sprintsync_core::RunContext;

use crate::error::{io_err, EngineError};
use crate::writer::atomic_write;

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// How a rule finds the region it replaces.
#[derive(Debug, Clone)]
pub enum Locator {
    /// Leftmost regex match, possibly spanning multiple lines.
    Pattern(Regex),
    /// A markdown section: the first line starting with `heading`,
    /// through the line before the next `## `-prefixed line (or EOF).
    Section { heading: &'static str },
}

impl Locator {
    /// Byte range of the single region this locator selects, if any.
    pub fn find(&self, text: &str) -> Option<std::ops::Range<usize>> {
        match self {
            Locator::Pattern(re) => re.find(text).map(|m| m.range()),
            Locator::Section { heading } => section_bounds(text, heading),
        }
    }
}

/// Region from the `heading`-prefixed line up to (not including) the
/// next top-level `## ` heading line, or EOF.
///
/// The trailing separator newlines before the next heading belong to
/// the region, so a replacement ending in `"\n\n"` reproduces the
/// original spacing exactly.
fn section_bounds(text: &str, heading: &str) -> Option<std::ops::Range<usize>> {
    let start = if text.starts_with(heading) {
        0
    } else {
        text.find(&format!("\n{heading}")).map(|i| i + 1)?
    };
    let after_heading_line = match text[start..].find('\n') {
        Some(i) => start + i + 1,
        None => text.len(),
    };
    let end = text[after_heading_line..]
        .find("\n## ")
        .map(|i| after_heading_line + i + 1)
        .unwrap_or(text.len());
    Some(start..end)
}

// ---------------------------------------------------------------------------
// PatchRule
// ---------------------------------------------------------------------------

/// One locate-and-replace rule.
pub struct PatchRule {
    /// Short identifier used in logs.
    pub name: &'static str,
    pub locator: Locator,
    /// Builds the replacement text from the run context. Must produce
    /// output the locator itself matches (idempotence contract).
    pub build: Box<dyn Fn(&RunContext) -> String + Send + Sync>,
}

impl std::fmt::Debug for PatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatchRule")
            .field("name", &self.name)
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}

impl PatchRule {
    /// Apply this rule to `text`, returning the rewritten text, or
    /// `None` when the locator does not match.
    pub fn apply(&self, text: &str, ctx: &RunContext) -> Option<String> {
        let range = self.locator.find(text)?;
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..range.start]);
        out.push_str(&(self.build)(ctx));
        out.push_str(&text[range.end..]);
        Some(out)
    }
}

// ---------------------------------------------------------------------------
// apply_rules / patch
// ---------------------------------------------------------------------------

/// Apply `rules` in order against `text`; pure, no filesystem.
///
/// Returns the rewritten text and the number of rules that matched.
pub fn apply_rules(text: &str, rules: &[PatchRule], ctx: &RunContext) -> (String, usize) {
    let mut current = text.to_string();
    let mut applied = 0;
    for rule in rules {
        match rule.apply(&current, ctx) {
            Some(next) => {
                current = next;
                applied += 1;
            }
            None => tracing::debug!("rule '{}' did not match", rule.name),
        }
    }
    (current, applied)
}

/// Outcome of patching one tracked document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Document was read, rewritten, and written back.
    Patched { rules_applied: usize },
    /// Document does not exist; nothing was read or written.
    Missing,
}

/// Patch the tracked document at `path` with `rules`.
///
/// A missing document is a warning, not an error: the filesystem is
/// left untouched and [`PatchOutcome::Missing`] is returned. Otherwise
/// the full text is read once, every rule applied in order, and the
/// result written back in one atomic write.
pub fn patch(
    path: &Path,
    rules: &[PatchRule],
    ctx: &RunContext,
) -> Result<PatchOutcome, EngineError> {
    if !path.exists() {
        tracing::warn!("tracked document not found: {}", path.display());
        return Ok(PatchOutcome::Missing);
    }

    let text = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let (rewritten, rules_applied) = apply_rules(&text, rules, ctx);
    atomic_write(path, &rewritten)?;

    tracing::info!(
        "patched {} ({rules_applied}/{} rules matched)",
        path.display(),
        rules.len()
    );
    Ok(PatchOutcome::Patched { rules_applied })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
