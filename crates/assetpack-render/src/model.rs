use assetpack_types::Severity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEntry {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub node_kind: String,
    pub node_name: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableOutcome {
    pub target_name: String,
    pub success: bool,
    pub archive: Option<String>,
    pub violations: Vec<RenderableEntry>,
    pub statistics: Vec<RenderableEntry>,
}
