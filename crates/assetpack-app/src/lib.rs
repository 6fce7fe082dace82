//! Use case orchestration for assetpack.
//!
//! This crate wires the layers together: settings and graph loading feed the analyzer,
//! successful reports feed the exporter, and outcomes become receipts and renderings.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod pipeline;
mod render;
mod report;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use pipeline::{RunInput, RunOutput, run_analyze, run_export};
pub use render::{render_markdown, render_text};
pub use report::{
    build_receipt, parse_report_json, serialize_report, to_renderable, verdict_exit_code,
};
