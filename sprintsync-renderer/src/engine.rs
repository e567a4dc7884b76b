//! Tera rendering engine for the sprint report.

use tera::Tera;

use sprintsync_core::RunContext;

use crate::context::ReportContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded template — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const SPRINT_REPORT_TPL: (&str, &str) = (
    "sprint_report.md.tera",
    include_str!("templates/sprint_report.md.tera"),
);

// ---------------------------------------------------------------------------
// ReportRenderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for the sprint report.
///
/// Uses the embedded template only. Create once with
/// [`ReportRenderer::new`] and reuse.
pub struct ReportRenderer {
    tera: Tera,
}

impl ReportRenderer {
    /// Construct a new [`ReportRenderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        let (name, content) = SPRINT_REPORT_TPL;
        tera.add_raw_template(name, content)?;
        Ok(ReportRenderer { tera })
    }

    /// Render the full sprint-report document for the given run.
    ///
    /// Output is LF-normalised. The caller decides where it is written;
    /// rendering itself performs no I/O.
    pub fn render(&self, ctx: &RunContext) -> Result<String, RenderError> {
        let report = ReportContext::from_run(ctx);
        let content = self.tera.render(SPRINT_REPORT_TPL.0, &report.to_tera_context()?)?;
        Ok(content.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
