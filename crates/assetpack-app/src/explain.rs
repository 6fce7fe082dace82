//! The `explain` use case: document a check and the codes it reports.

use assetpack_types::explain::{self, Explanation};
use std::fmt::Write as _;

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    NotFound {
        identifier: String,
        known: &'static [Explanation],
    },
}

/// Resolve a check_id or code to the check that owns it.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier.trim()) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            known: explain::all_explanations(),
        },
    }
}

pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", exp.title);
    let _ = writeln!(out, "check: {}", exp.check_id);
    let _ = writeln!(out, "codes: {}", exp.codes.join(", "));
    let _ = writeln!(out, "\n{}\n", exp.description);
    let _ = writeln!(out, "Fix: {}", exp.remediation);

    if let Some(config) = exp.config {
        out.push_str("\nConfigure in assetpack.toml:\n");
        for line in config.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}

/// One line per check with its codes, so either can be passed back to `explain`.
pub fn format_not_found(identifier: &str, known: &[Explanation]) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\nKnown checks:\n");
    for exp in known {
        let _ = writeln!(out, "  {}  ({})", exp.check_id, exp.codes.join(", "));
    }
    out
}
