use assetpack_types::{DependencyNode, EntryReceipt, NodeId, Severity};
use std::collections::BTreeSet;

/// One violation or statistic recorded during analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub message: String,
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub node_id: NodeId,
    /// Name of the concrete offending object (a composite's child for component violations).
    pub node_name: String,
    pub node_kind: String,
}

impl ReportEntry {
    pub fn for_node(node: &DependencyNode, severity: Severity, check_id: &str, code: &str) -> Self {
        Self {
            message: String::new(),
            severity,
            check_id: check_id.to_string(),
            code: code.to_string(),
            node_id: node.id.clone(),
            node_name: node.name.clone(),
            node_kind: node.kind.label().to_string(),
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }

    pub fn with_node_name(mut self, name: &str) -> Self {
        self.node_name = name.to_string();
        self
    }

    pub fn to_receipt(&self) -> EntryReceipt {
        EntryReceipt {
            severity: self.severity,
            check_id: self.check_id.clone(),
            code: self.code.clone(),
            message: self.message.clone(),
            node_id: self.node_id.clone(),
            node_name: self.node_name.clone(),
            node_kind: self.node_kind.clone(),
        }
    }
}

/// Result of one analysis pass over one root target.
///
/// Entries are append-only, so a report that has failed stays failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    target: DependencyNode,
    violations: Vec<ReportEntry>,
    statistics: Vec<ReportEntry>,
    ignored: BTreeSet<NodeId>,
}

impl Report {
    pub fn new(target: &DependencyNode) -> Self {
        Self {
            target: target.clone(),
            violations: Vec::new(),
            statistics: Vec::new(),
            ignored: BTreeSet::new(),
        }
    }

    pub fn target(&self) -> &DependencyNode {
        &self.target
    }

    pub fn success(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[ReportEntry] {
        &self.violations
    }

    pub fn statistics(&self) -> &[ReportEntry] {
        &self.statistics
    }

    pub fn ignored(&self) -> &BTreeSet<NodeId> {
        &self.ignored
    }

    pub fn push_violation(&mut self, entry: ReportEntry) {
        self.violations.push(entry);
    }

    pub fn push_statistic(&mut self, entry: ReportEntry) {
        self.statistics.push(entry);
    }

    /// Exclude `node` from export without flagging it.
    pub fn mark_ignored(&mut self, node: &DependencyNode) {
        self.ignored.insert(node.id.clone());
    }

    pub fn is_ignored(&self, node: &DependencyNode) -> bool {
        self.ignored.contains(&node.id)
    }
}
