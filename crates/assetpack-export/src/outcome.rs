use crate::ExportError;
use assetpack_domain::report::Report;
use assetpack_types::{ArchivedEntry, DependencyNode};
use camino::Utf8PathBuf;

/// Result of the export stage for one root target.
#[derive(Debug)]
pub struct ExportOutcome {
    pub report: Report,
    pub archive_path: Option<Utf8PathBuf>,
    /// Authoritative for the target's result when set.
    pub error: Option<ExportError>,
    pub entries: Vec<ArchivedEntry>,
}

impl ExportOutcome {
    /// Outcome for a target whose analysis failed; nothing is written.
    pub fn not_exported(report: Report) -> Self {
        Self {
            report,
            archive_path: None,
            error: None,
            entries: Vec::new(),
        }
    }

    pub fn target(&self) -> &DependencyNode {
        self.report.target()
    }

    pub fn success(&self) -> bool {
        self.error.is_none() && self.report.success()
    }
}
