//! # sprintsync-renderer
//!
//! Tera-based generator for the sprint report. The report is built
//! wholesale from structured fields (no in-place patching): the engine
//! crate writes the rendered string to the label-keyed report path.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use sprintsync_core::{ReportNarrative, RunContext};
//! use sprintsync_renderer::ReportRenderer;
//!
//! fn render(today: NaiveDate) {
//!     let ctx = RunContext::new(today, None, ReportNarrative::default());
//!     if let Ok(renderer) = ReportRenderer::new() {
//!         if let Ok(report) = renderer.render(&ctx) {
//!             println!("{} bytes", report.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::ReportContext;
pub use engine::ReportRenderer;
pub use error::RenderError;
