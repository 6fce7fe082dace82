//! Receipt construction and serialization.

use anyhow::Context;
use assetpack_domain::report::ReportEntry;
use assetpack_export::ExportOutcome;
use assetpack_render::{RenderableEntry, RenderableOutcome};
use assetpack_types::{ReportEnvelope, SCHEMA_REPORT_V1, TargetReceipt, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Build the JSON receipt for one run.
pub fn build_receipt(
    outcomes: &[ExportOutcome],
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> ReportEnvelope {
    let verdict = if outcomes.iter().all(ExportOutcome::success) {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "assetpack".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        targets: outcomes.iter().map(target_receipt).collect(),
    }
}

fn target_receipt(outcome: &ExportOutcome) -> TargetReceipt {
    let report = &outcome.report;
    TargetReceipt {
        target: outcome.target().name.clone(),
        success: outcome.success(),
        archive: outcome.archive_path.as_ref().map(|p| p.to_string()),
        error: outcome.error.as_ref().map(|e| e.to_string()),
        violations: report.violations().iter().map(ReportEntry::to_receipt).collect(),
        statistics: report.statistics().iter().map(ReportEntry::to_receipt).collect(),
        ignored: report.ignored().iter().cloned().collect(),
        entries: outcome.entries.clone(),
    }
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    serde_json::from_str(text).context("parse report JSON")
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

pub fn to_renderable(outcome: &ExportOutcome) -> RenderableOutcome {
    RenderableOutcome {
        target_name: outcome.target().name.clone(),
        success: outcome.success(),
        archive: outcome.archive_path.as_ref().map(|p| p.to_string()),
        violations: outcome.report.violations().iter().map(renderable_entry).collect(),
        statistics: outcome.report.statistics().iter().map(renderable_entry).collect(),
    }
}

fn renderable_entry(e: &ReportEntry) -> RenderableEntry {
    RenderableEntry {
        severity: e.severity,
        check_id: e.check_id.clone(),
        code: e.code.clone(),
        node_kind: e.node_kind.clone(),
        node_name: e.node_name.clone(),
        message: e.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetpack_domain::report::Report;
    use assetpack_types::{DependencyNode, NodeId, NodeKind, Severity, ids};

    fn library(id: &str) -> DependencyNode {
        DependencyNode {
            id: NodeId::new(id),
            name: format!("{id}.dll"),
            path: None,
            kind: NodeKind::Library,
        }
    }

    fn outcomes() -> Vec<ExportOutcome> {
        let target = DependencyNode {
            id: NodeId::new("cube"),
            name: "Cube".to_string(),
            path: None,
            kind: NodeKind::Other,
        };
        let mut failed = Report::new(&target);
        failed.mark_ignored(&library("UnityEngine.UI"));
        failed.push_violation(
            ReportEntry::for_node(
                &library("MyPlugin"),
                Severity::Error,
                ids::CHECK_ASSETS_LIBRARY_WHITELIST,
                ids::CODE_UNSUPPORTED_LIBRARY,
            )
            .with_message("Unsupported dll : MyPlugin.dll.".to_string()),
        );

        let sphere = DependencyNode {
            id: NodeId::new("sphere"),
            name: "Sphere".to_string(),
            ..target
        };
        vec![
            ExportOutcome::not_exported(failed),
            ExportOutcome::not_exported(Report::new(&sphere)),
        ]
    }

    #[test]
    fn receipt_fails_when_any_target_fails() {
        let now = OffsetDateTime::now_utc();
        let receipt = build_receipt(&outcomes(), now, now);

        assert_eq!(receipt.schema, SCHEMA_REPORT_V1);
        assert_eq!(receipt.verdict, Verdict::Fail);
        assert_eq!(receipt.targets.len(), 2);

        let cube = &receipt.targets[0];
        assert_eq!(cube.target, "Cube");
        assert!(!cube.success);
        assert_eq!(cube.violations[0].code, ids::CODE_UNSUPPORTED_LIBRARY);
        assert_eq!(cube.ignored, vec![NodeId::new("UnityEngine.UI")]);
        assert!(receipt.targets[1].success);
    }

    #[test]
    fn receipt_round_trips_through_json() {
        let now = OffsetDateTime::now_utc();
        let receipt = build_receipt(&outcomes()[1..], now, now);
        assert_eq!(receipt.verdict, Verdict::Pass);

        let bytes = serialize_report(&receipt).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\"schema\": \"assetpack.report.v1\""));
        assert!(text.contains("\"verdict\": \"pass\""));

        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.targets, receipt.targets);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }

    #[test]
    fn renderable_keeps_entry_fields() {
        let outcomes = outcomes();
        let r = to_renderable(&outcomes[0]);
        assert_eq!(r.target_name, "Cube");
        assert!(!r.success);
        assert_eq!(r.violations[0].node_kind, "Library");
        assert_eq!(r.violations[0].node_name, "MyPlugin.dll");
    }
}
