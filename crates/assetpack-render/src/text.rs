use crate::{RenderableEntry, RenderableOutcome};

/// Console summary for one target.
///
/// ```text
/// [Cube] 1 Error(s):
/// Library: [MyPlugin.dll]  Error: [Unsupported dll : MyPlugin.dll. ...]
/// ```
pub fn format_outcome(outcome: &RenderableOutcome) -> String {
    let mut out = String::new();

    let entries = if outcome.success {
        if outcome.statistics.is_empty() {
            out.push_str(&format!("[{}] Export complete.\n", outcome.target_name));
        } else {
            out.push_str(&format!("[{}] Export complete. Stats:\n", outcome.target_name));
        }
        &outcome.statistics
    } else {
        out.push_str(&format!(
            "[{}] {} Error(s):\n",
            outcome.target_name,
            outcome.violations.len()
        ));
        &outcome.violations
    };

    for entry in entries {
        out.push_str(&entry_line(entry));
        out.push('\n');
    }

    out
}

fn entry_line(entry: &RenderableEntry) -> String {
    format!(
        "{}: [{}]  {}: [{}]",
        entry.node_kind,
        entry.node_name,
        entry.severity.as_str(),
        entry.message
    )
}
