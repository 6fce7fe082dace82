use crate::{RenderableEntry, RenderableOutcome};
use assetpack_types::Severity;

/// Markdown summary over every target of one run.
pub fn render_markdown(outcomes: &[RenderableOutcome]) -> String {
    let mut out = String::new();

    out.push_str("# Assetpack report\n\n");
    let failed = outcomes.iter().filter(|o| !o.success).count();
    let verdict = if failed == 0 { "PASS" } else { "FAIL" };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Targets: {} ({} failed)\n\n",
        verdict,
        outcomes.len(),
        failed
    ));

    if outcomes.is_empty() {
        out.push_str("No targets.\n");
        return out;
    }

    for o in outcomes {
        let status = if o.success { "PASS" } else { "FAIL" };
        out.push_str(&format!("## {} ({})\n\n", o.target_name, status));

        if let Some(archive) = &o.archive {
            out.push_str(&format!("Archive: `{}`\n\n", archive));
        }

        for v in &o.violations {
            out.push_str(&bullet(v));
        }
        for s in &o.statistics {
            out.push_str(&bullet(s));
        }
        if o.violations.is_empty() && o.statistics.is_empty() {
            out.push_str("No findings.\n");
        }
        out.push('\n');
    }

    out
}

fn bullet(e: &RenderableEntry) -> String {
    let sev = match e.severity {
        Severity::Info => "INFO",
        Severity::Error => "ERROR",
    };
    format!(
        "- [{}] `{}` / `{}` {} `{}`: {}\n",
        sev, e.check_id, e.code, e.node_kind, e.node_name, e.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty_run() {
        let md = render_markdown(&[]);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No targets."));
    }

    #[test]
    fn renders_each_target_with_findings_and_archive() {
        let outcomes = vec![
            RenderableOutcome {
                target_name: "Cube".to_string(),
                success: false,
                archive: None,
                violations: vec![RenderableEntry {
                    severity: Severity::Error,
                    check_id: "assets.library_whitelist".to_string(),
                    code: "unsupported_library".to_string(),
                    node_kind: "Library".to_string(),
                    node_name: "MyPlugin.dll".to_string(),
                    message: "Unsupported dll : MyPlugin.dll.".to_string(),
                }],
                statistics: Vec::new(),
            },
            RenderableOutcome {
                target_name: "Sphere".to_string(),
                success: true,
                archive: Some("Exports/Sphere.zip".to_string()),
                violations: Vec::new(),
                statistics: Vec::new(),
            },
        ];

        let md = render_markdown(&outcomes);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("Targets: 2 (1 failed)"));
        assert!(md.contains("## Cube (FAIL)"));
        assert!(md.contains("[ERROR] `assets.library_whitelist` / `unsupported_library`"));
        assert!(md.contains("## Sphere (PASS)"));
        assert!(md.contains("Archive: `Exports/Sphere.zip`"));
        assert!(md.contains("No findings."));
    }
}
